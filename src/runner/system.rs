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

use std::path::Path;
use std::process::Command;

use log::debug;

use super::{remove_file_if_exists, CommandLine, ProcessRunner};
use crate::errors::{Error, Result};

/// Spawns the commands as child processes of the current one.
///
/// Every command is echoed to stdout before it starts. The children inherit
/// stdin, stdout and stderr so whatever the tools print reaches the user
/// unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, directory: &Path) -> Result<Option<i32>> {
        println!("{command}");
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(directory)
            .status()
            .map_err(|source| Error::SpawnFailed {
                program: command.program.clone(),
                source,
            })?;
        debug!("'{}' finished: {status}", command.program);
        Ok(status.code())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        println!("rm -f {}", path.display());
        remove_file_if_exists(path)
    }
}
