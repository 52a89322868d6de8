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

//! A small dependency-driven task runner for the `demo` program.
//!
//! The runner knows a fixed set of targets (see [`Buildfile`]): it compiles
//! `demo.c` into `demo`, optionally runs the Python checks, lints the Python
//! files of the working directory and removes the build artifact. Targets are
//! resolved into a [`Plan`], checked for freshness and executed one after the
//! other by an [`Executor`], which stops at the first failing process.
//!
//! ```no_run
//! use demake::{Buildfile, Executor, SystemRunner, Variables, Variant};
//!
//! let buildfile = Buildfile::new(Variant::Full);
//! let variables = Variables::from_env();
//! let executor = Executor::new(&buildfile, &variables, SystemRunner, ".");
//! executor.run(&["all"]).unwrap();
//! ```

mod errors;
mod models;
mod plan;
mod runner;
mod utils;
mod variables;

pub use errors::{Error, Result};
pub use models::{Buildfile, Recipe, Target, Variant};
pub use plan::{Freshness, Plan};
pub use runner::{CommandLine, DryRunner, Executor, ProcessRunner, Report, SystemRunner};
pub use utils::expand_glob;
pub use variables::Variables;

#[cfg(feature = "test_utils")]
pub mod test_utils;
