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

mod command_line;
mod dry_run;
mod executor;
mod system;

pub use command_line::CommandLine;
pub use dry_run::DryRunner;
pub use executor::{Executor, Report};
pub use system::SystemRunner;

use std::path::Path;

use log::debug;

use crate::errors::Result;

/// Runs the external processes and filesystem changes recipes ask for.
///
/// The [`Executor`] decides *what* has to run; implementations of this trait
/// decide *how*. [`SystemRunner`] spawns real processes, [`DryRunner`] only
/// prints what would be done.
pub trait ProcessRunner {
    /// Runs `command` inside `directory` and waits for it to finish.
    ///
    /// Returns the exit code of the process, or `None` if it was terminated
    /// by a signal. Failing to start the process at all is an error.
    fn run(&self, command: &CommandLine, directory: &Path) -> Result<Option<i32>>;

    /// Deletes a file. Deleting a file that doesn't exist is not an error.
    fn remove(&self, path: &Path) -> Result<()> {
        remove_file_if_exists(path)
    }
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, command: &CommandLine, directory: &Path) -> Result<Option<i32>> {
        (**self).run(command, directory)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        (**self).remove(path)
    }
}

pub(crate) fn remove_file_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Nothing to remove at '{}'", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
