// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use super::{Recipe, Target};
use crate::errors::{Error, Result};

const SOURCE: &str = "demo.c";
const OUTPUT: &str = "demo";

const TESTS_DIR: &str = "tests";
const TESTS_PATTERN: &str = "*_check.py";

/// Selects which set of targets is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `all` builds, runs the Python checks and lints.
    #[default]
    Full,

    /// There is no `check` target, `all` only builds and lints.
    Lean,
}

/// The set of targets the runner can execute.
#[derive(Debug, Clone, Serialize)]
pub struct Buildfile {
    variant: Variant,
    default_goal: String,
    targets: Vec<Target>,
}

impl Buildfile {
    pub fn new(variant: Variant) -> Self {
        let all = match variant {
            Variant::Full => Target::phony("all", &["build", "check", "lint"], Recipe::None),
            Variant::Lean => Target::phony("all", &["build", "lint"], Recipe::None),
        };
        let mut targets = vec![
            all,
            Target::phony("build", &[OUTPUT], Recipe::None),
            Target::file(
                OUTPUT,
                &[SOURCE],
                Recipe::Compile {
                    source: SOURCE.to_string(),
                    output: OUTPUT.to_string(),
                },
            ),
        ];
        if variant == Variant::Full {
            targets.push(Target::phony(
                "check",
                &[],
                Recipe::RunTests {
                    start_dir: TESTS_DIR.to_string(),
                    pattern: TESTS_PATTERN.to_string(),
                },
            ));
        }
        targets.push(Target::phony("lint", &[], Recipe::Lint));
        targets.push(Target::phony(
            "clean",
            &[],
            Recipe::Clean {
                artifacts: vec![OUTPUT.to_string()],
            },
        ));

        Self::from_targets(variant, targets)
    }

    /// Builds a buildfile out of arbitrary targets. The first one is the
    /// default goal.
    pub(crate) fn from_targets(variant: Variant, targets: Vec<Target>) -> Self {
        let default_goal = targets
            .first()
            .map(|target| target.name.clone())
            .unwrap_or_default();
        Self {
            variant,
            default_goal,
            targets,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn default_goal(&self) -> &str {
        &self.default_goal
    }

    /// Targets in declaration order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Returns `None` for names without a rule, which are plain files.
    pub fn find(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.name == name)
    }

    pub fn target(&self, name: &str) -> Result<&Target> {
        self.find(name)
            .ok_or_else(|| Error::UnknownTarget(name.to_string()))
    }
}
