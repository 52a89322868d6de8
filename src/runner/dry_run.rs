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

use super::{CommandLine, ProcessRunner};
use crate::errors::Result;

/// Prints the commands instead of running them. Every command "succeeds".
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunner;

impl ProcessRunner for DryRunner {
    fn run(&self, command: &CommandLine, _directory: &Path) -> Result<Option<i32>> {
        println!("{command}");
        Ok(Some(0))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        println!("rm -f {}", path.display());
        Ok(())
    }
}
