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

use super::Recipe;

/// A named unit of work.
///
/// File targets (`phony == false`) name the artifact they produce and are
/// only executed when that artifact is out of date. Phony targets are not tied
/// to any file and always execute, even if a file with the same name exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    pub prerequisites: Vec<String>,
    pub recipe: Recipe,
    pub phony: bool,
}

impl Target {
    pub fn phony(name: &str, prerequisites: &[&str], recipe: Recipe) -> Self {
        Self {
            name: name.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
            recipe,
            phony: true,
        }
    }

    pub fn file(name: &str, prerequisites: &[&str], recipe: Recipe) -> Self {
        Self {
            phony: false,
            ..Self::phony(name, prerequisites, recipe)
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.name)?;
        for prerequisite in &self.prerequisites {
            write!(f, " {prerequisite}")?;
        }
        Ok(())
    }
}
