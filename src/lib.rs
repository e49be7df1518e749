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


//! Hyprland keybinding checker
//!
//! Parses Hyprland keybinding sources and tells you whether a key
//! combination is already taken, across the shipped `default` bindings and
//! the user's `custom` bindings.
//!
//! # Architecture
//!
//! - **`core`:** Business logic (binding types, parser, binding sets, conflict queries)
//! - **`config`:** File operations (source paths, loading, atomic appends, backups)
//!
//! # Examples
//!
//! ## Parsing a keybinding source
//!
//! ```no_run
//! use hyprbind::core::parser::parse_file;
//! use std::path::Path;
//!
//! let set = parse_file(Path::new("/tmp/keybindings.conf"), true)?;
//! println!("Found {} keybindings", set.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Checking a combination
//!
//! ```
//! use hyprbind::core::{conflict::check_combination, parser::parse_bindings};
//!
//! let default = parse_bindings("$mainMod = SUPER\nbind = $mainMod, Q, killactive\n", true);
//! let custom = parse_bindings("bind = $mainMod, B, exec, firefox\n", false);
//!
//! let conflicts = check_combination(&default, &custom, "$mainMod, Q");
//! assert_eq!(conflicts.len(), 1);
//! assert!(check_combination(&default, &custom, "$mainMod, T").is_empty());
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use core::{AddOrigin, Binding, BindingMode, BindingSet, Origin};
