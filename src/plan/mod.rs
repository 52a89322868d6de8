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

mod freshness;

pub use freshness::Freshness;

use std::collections::HashSet;

use log::debug;

use crate::errors::{Error, Result};
use crate::models::{Buildfile, Target};

/// The targets needed to reach some goals, in the order they have to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<'a> {
    steps: Vec<&'a Target>,
}

impl<'a> Plan<'a> {
    /// Orders the targets reachable from `goals` so that every target comes
    /// after all of its prerequisites.
    ///
    /// Goals are visited in the given order and prerequisites in declaration
    /// order, each target is included once. Prerequisites without a rule are
    /// source files and don't show up in the plan. An empty `goals` slice
    /// selects the default goal.
    pub fn resolve(buildfile: &'a Buildfile, goals: &[&str]) -> Result<Self> {
        let default_goal = [buildfile.default_goal()];
        let goals = if goals.is_empty() {
            &default_goal[..]
        } else {
            goals
        };

        let mut resolver = Resolver {
            buildfile,
            done: HashSet::new(),
            visiting: Vec::new(),
            steps: Vec::new(),
        };
        for goal in goals {
            let target = buildfile.target(goal)?;
            resolver.visit(target)?;
        }

        debug!(
            "Plan for {goals:?}: {:?}",
            resolver.steps.iter().map(|t| &t.name).collect::<Vec<_>>()
        );
        Ok(Self {
            steps: resolver.steps,
        })
    }

    pub fn steps(&self) -> &[&'a Target] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

struct Resolver<'a> {
    buildfile: &'a Buildfile,
    done: HashSet<&'a str>,
    visiting: Vec<&'a str>,
    steps: Vec<&'a Target>,
}

impl<'a> Resolver<'a> {
    fn visit(&mut self, target: &'a Target) -> Result<()> {
        if self.done.contains(target.name.as_str()) {
            return Ok(());
        }
        if let Some(position) = self.visiting.iter().position(|&n| n == target.name) {
            let mut cycle: Vec<String> = self.visiting[position..]
                .iter()
                .map(|n| n.to_string())
                .collect();
            cycle.push(target.name.clone());
            return Err(Error::DependencyCycle(cycle));
        }

        self.visiting.push(&target.name);
        for prerequisite in &target.prerequisites {
            if let Some(prerequisite) = self.buildfile.find(prerequisite) {
                self.visit(prerequisite)?;
            }
        }
        self.visiting.pop();

        self.done.insert(&target.name);
        self.steps.push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Recipe, Variant};
    use rstest::rstest;

    fn names<'a>(plan: &'a Plan) -> Vec<&'a str> {
        plan.steps().iter().map(|t| t.name.as_str()).collect()
    }

    #[rstest]
    #[case(Variant::Full, &[], vec!["demo", "build", "check", "lint", "all"])]
    #[case(Variant::Lean, &[], vec!["demo", "build", "lint", "all"])]
    #[case(Variant::Full, &["all"], vec!["demo", "build", "check", "lint", "all"])]
    #[case(Variant::Full, &["build"], vec!["demo", "build"])]
    #[case(Variant::Full, &["demo"], vec!["demo"])]
    #[case(Variant::Full, &["clean", "build"], vec!["clean", "demo", "build"])]
    #[case(Variant::Full, &["lint", "lint"], vec!["lint"])]
    #[case(Variant::Full, &["build", "all"], vec!["demo", "build", "check", "lint", "all"])]
    fn test_resolve(
        #[case] variant: Variant,
        #[case] goals: &[&str],
        #[case] expected: Vec<&str>,
    ) {
        let buildfile = Buildfile::new(variant);
        let plan = Plan::resolve(&buildfile, goals).unwrap();
        assert_eq!(names(&plan), expected);
    }

    #[rstest]
    #[case(Variant::Full, "install")]
    #[case(Variant::Lean, "check")]
    #[case(Variant::Full, "demo.c")]
    fn test_unknown_goal(#[case] variant: Variant, #[case] goal: &str) {
        let buildfile = Buildfile::new(variant);
        let result = Plan::resolve(&buildfile, &[goal]);
        assert!(
            matches!(result, Err(Error::UnknownTarget(ref name)) if name == goal),
            "{result:?}"
        );
    }

    #[test]
    fn test_cycle() {
        let buildfile = Buildfile::from_targets(
            Variant::Full,
            vec![
                Target::phony("all", &["a"], Recipe::None),
                Target::phony("a", &["b"], Recipe::None),
                Target::phony("b", &["a"], Recipe::None),
            ],
        );
        let result = Plan::resolve(&buildfile, &[]);
        assert!(
            matches!(result, Err(Error::DependencyCycle(ref cycle)) if cycle == &["a", "b", "a"]),
            "{result:?}"
        );
    }

    #[test]
    fn test_shared_prerequisite_runs_once() {
        let buildfile = Buildfile::from_targets(
            Variant::Full,
            vec![
                Target::phony("all", &["left", "right"], Recipe::None),
                Target::phony("left", &["base"], Recipe::None),
                Target::phony("right", &["base"], Recipe::None),
                Target::phony("base", &[], Recipe::None),
            ],
        );
        let plan = Plan::resolve(&buildfile, &[]).unwrap();
        assert_eq!(names(&plan), vec!["base", "left", "right", "all"]);
    }
}
