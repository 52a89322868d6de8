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

use globset::GlobBuilder;
use log::debug;

use crate::errors::Result;

/// Returns `true` if the word contains glob metacharacters.
pub(crate) fn is_glob(word: &str) -> bool {
    word.contains(&['*', '?', '[', '{'][..])
}

/// Expands a glob pattern against the files of `directory`.
///
/// Only the last path component of the pattern may contain metacharacters
/// (`*.py`, `tests/*_check.py`); leading components are taken literally.
/// Matching is not recursive, hidden files are only matched by patterns that
/// start with a dot and directories are never returned. The result is sorted
/// and expressed relative to `directory`, the same way the pattern was
/// written. A missing directory yields no matches.
pub fn expand_glob(directory: &Path, pattern: &str) -> Result<Vec<String>> {
    let (prefix, file_pattern) = match pattern.rsplit_once('/') {
        Some((prefix, file_pattern)) => (Some(prefix), file_pattern),
        None => (None, pattern),
    };
    let matcher = GlobBuilder::new(file_pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher();
    let match_hidden = file_pattern.starts_with('.');

    let search_dir = match prefix {
        Some(prefix) => directory.join(prefix),
        None => directory.to_path_buf(),
    };
    let entries = match std::fs::read_dir(&search_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Directory '{}' does not exist", search_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with('.') && !match_hidden {
            continue;
        }
        if matcher.is_match(&name) {
            matches.push(match prefix {
                Some(prefix) => format!("{prefix}/{name}"),
                None => name,
            });
        }
    }
    matches.sort();
    debug!("Pattern '{pattern}' matched {} file(s)", matches.len());
    Ok(matches)
}
