// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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


//! src/core/parser.rs
//!
//! Hyprland keybinding file parser
//!
//! This module reads keybinding sources line by line and builds a
//! `BindingSet`. It handles:
//! - All bind keywords (`bind`, `binde`, `bindl`, `bindm`, ...)
//! - Variable definitions (`$name = value`), with `$mainMod` captured
//! - Inline descriptions after `#`
//! - Comments, blank lines and anything unrecognised (skipped)
//!
//! # Architecture
//! Each trimmed line is classified first (`classify_line`). The
//! `bind<suffix> =` header is matched with nom combinators; the remainder
//! is split on commas by hand because trigger and action fields are free
//! text.
//!
//! # Leniency
//! The files are edited by hand, so a declaration with fewer than two
//! fields is dropped and parsing continues. The only error is failing to
//! read the source at all.

use nom::{
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0},
    combinator::recognize,
    IResult, Parser,
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{
    binding_set::BindingSet,
    combo::TRIGGER_SEPARATOR,
    types::{AddOrigin, Binding, BindingMode},
};

/// Variable holding the main modifier key
pub const MAIN_MOD_VARIABLE: &str = "$mainMod";

/// Errors raised while loading a keybinding source
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Cannot read keybinding source {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Shape of a single trimmed config line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty line
    Blank,
    /// Line starting with `#`
    Comment,
    /// `$NAME = VALUE`, both sides trimmed (name keeps its `$`)
    Variable { name: &'a str, value: &'a str },
    /// `bind<suffix> = REMAINDER`
    Declaration { keyword: &'a str, remainder: &'a str },
    /// Anything else, including a `$` line without `=`
    Unrecognized,
}

/// Parses keybinding text into a `BindingSet`.
///
/// With `capture_modifier` set, a `$mainMod` assignment turns the set into a
/// `Default` set and records the assigned value as its modifier alias.
/// Without it, a `$mainMod` assignment leaves the set `Custom`. A source with
/// no `$mainMod` line stays `Custom`.
///
/// # Example
/// ```
/// use hyprbind::core::{parser::parse_bindings, BindingMode};
///
/// let set = parse_bindings("$mainMod = SUPER\nbind = $mainMod, Q, killactive\n", true);
/// assert_eq!(set.mode(), BindingMode::Default);
/// assert_eq!(set.modifier_alias(), "SUPER");
/// assert_eq!(set.len(), 1);
/// ```
pub fn parse_bindings(content: &str, capture_modifier: bool) -> BindingSet {
    let mut set = BindingSet::new();
    let mut variables: HashMap<&str, &str> = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        match classify_line(line.trim()) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Variable { name, value } => {
                variables.insert(name, value);
            }
            LineKind::Declaration { keyword, remainder } => match parse_declaration(remainder) {
                Some(binding) => {
                    set.add_binding(binding, AddOrigin::Parser);
                }
                None => debug!(line = line_num, keyword, "skipping declaration with fewer than two fields"),
            },
            LineKind::Unrecognized => debug!(line = line_num, "skipping unrecognised line"),
        }
    }

    // Reassignment follows the compositor: the last `$mainMod` wins
    if let Some(value) = variables.get(MAIN_MOD_VARIABLE) {
        if capture_modifier {
            debug!(modifier = *value, "captured main modifier");
            set.set_mode(BindingMode::Default, value);
        } else {
            set.set_mode(BindingMode::Custom, "");
        }
    }

    set
}

/// Reads and parses a keybinding file.
///
/// # Errors
/// Returns `ParseError::SourceUnreadable` when the file cannot be read. No
/// partially-populated set is ever returned.
pub fn parse_file(path: &Path, capture_modifier: bool) -> Result<BindingSet, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_bindings(&content, capture_modifier);
    info!(path = %path.display(), bindings = set.len(), mode = %set.mode(), "parsed keybinding source");

    Ok(set)
}

/// Classifies one already-trimmed line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        return LineKind::Comment;
    }

    if line.starts_with('$') {
        return match line.split_once('=') {
            Some((name, value)) => LineKind::Variable {
                name: name.trim(),
                value: value.trim(),
            },
            None => LineKind::Unrecognized,
        };
    }

    match bind_header(line) {
        Ok((remainder, keyword)) => LineKind::Declaration { keyword, remainder },
        Err(_) => LineKind::Unrecognized,
    }
}

/// Matches `bind<word chars>`, optional whitespace, `=`, optional whitespace.
///
/// Returns the remainder of the line and the keyword (`bind`, `bindel`, ...).
pub fn bind_header(input: &str) -> IResult<&str, &str> {
    let (input, keyword) = recognize((
        tag("bind"),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)?;
    let (remainder, _) = (multispace0, char('='), multispace0).parse(input)?;

    Ok((remainder, keyword))
}

/// Builds a binding from the text after `bind =`.
///
/// Text after the first `#` becomes the description. The remainder is split
/// on `,` and trimmed; the first two fields form the trigger and the rest
/// are re-joined with `, ` as the action. Returns `None` for fewer than two
/// fields.
///
/// # Example
/// ```
/// use hyprbind::core::parser::parse_declaration;
///
/// let binding = parse_declaration("SUPER, RETURN, exec,kitty # Terminal").unwrap();
/// assert_eq!(binding.action(), "exec, kitty");
/// assert_eq!(binding.description(), "Terminal");
/// assert!(parse_declaration("ALT").is_none());
/// ```
pub fn parse_declaration(remainder: &str) -> Option<Binding> {
    let (fields, description) = match remainder.split_once('#') {
        Some((fields, comment)) => (fields, comment.trim()),
        None => (remainder, ""),
    };

    let parts: Vec<&str> = fields.split(TRIGGER_SEPARATOR).map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }

    let trigger = parts[..2].join(TRIGGER_SEPARATOR);
    let action = parts[2..].join(", ");

    Some(Binding::with_description(&trigger, &action, description))
}
