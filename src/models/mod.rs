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

//! Declarative description of the targets the runner knows about.
//!
//! A [`Buildfile`] is a list of [`Target`]s, each one with its prerequisites
//! and the [`Recipe`] that brings it up to date. These models carry no
//! behaviour tied to the filesystem: planning and execution live in
//! [`crate::plan`] and [`crate::runner`].

mod buildfile;
mod recipe;
mod target;

pub use buildfile::{Buildfile, Variant};
pub use recipe::Recipe;
pub use target::Target;

pub(crate) use recipe::Action;
