// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms for reading
//! keybinding sources and answering conflict queries:
//! - Type definitions for bindings and set modes
//! - The `BindingSet` collection with its uniqueness query
//! - The line-oriented parser
//! - Cross-set projection and duplicate detection
//!
//! Everything here is free of UI concerns; the only I/O is `parser::parse_file`.

pub mod binding_set;
pub mod combo;
pub mod conflict;
pub mod parser;
pub mod types;

pub use binding_set::BindingSet;
pub use combo::Delimiter;
pub use conflict::{Conflict, ConflictDetector, TaggedBinding};
pub use parser::ParseError;
pub use types::*;

#[cfg(test)]
mod tests;
