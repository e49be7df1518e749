//! src/core/types.rs
//!
//! Core type definitions for keybinding management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Binding`: One parsed `bind` rule (trigger tokens, action, description)
//! - `BindingMode`: Whether a set was loaded from the default or a custom source
//! - `Origin`: Which of the two sets a binding came from, for tagged results
//! - `AddOrigin`: Who is appending a binding (the parser or the user)
//!
//! `Binding` is a value type. Its fields are private and only readable once
//! constructed, so a binding never changes after the parser (or a user add)
//! creates it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::combo::TRIGGER_SEPARATOR;

/// A single keybinding rule
///
/// # Example
/// ```
/// use hyprbind::core::Binding;
///
/// let binding = Binding::new("SUPER, Q", "killactive");
/// assert_eq!(binding.trigger(), ["SUPER", "Q"]);
/// assert_eq!(binding.render(), "bind = SUPER, Q, killactive");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Binding {
    /// Trigger tokens in declaration order (e.g. `["SUPER", "RETURN"]`)
    trigger: Vec<String>,

    /// Everything after the trigger fields, e.g. `exec, kitty`. May be empty.
    action: String,

    /// Inline comment text following `#`, empty when absent
    description: String,
}

impl Binding {
    /// Creates a binding without a description.
    ///
    /// `trigger` is split on `,` and every piece trimmed. Token content is not
    /// validated; empty tokens are kept.
    pub fn new(trigger: &str, action: &str) -> Self {
        Self::with_description(trigger, action, "")
    }

    /// Creates a binding carrying an inline description.
    pub fn with_description(trigger: &str, action: &str, description: &str) -> Self {
        Self {
            trigger: trigger
                .split(TRIGGER_SEPARATOR)
                .map(|token| token.trim().to_string())
                .collect(),
            action: action.to_string(),
            description: description.to_string(),
        }
    }

    pub fn trigger(&self) -> &[String] {
        &self.trigger
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Trigger tokens joined with `,`, the form every lookup compares against.
    pub fn trigger_key(&self) -> String {
        self.trigger.join(TRIGGER_SEPARATOR)
    }

    /// Trigger tokens joined with ` + ` for display (`SUPER + Q`).
    pub fn display_trigger(&self) -> String {
        self.trigger.join(" + ")
    }

    /// Renders the binding back to a dialect line.
    ///
    /// Format: `bind = T1, T2, ACTION` with ` # DESCRIPTION` appended only when
    /// the description is non-empty. The same binding always renders the same.
    pub fn render(&self) -> String {
        let mut line = format!("bind = {}, {}", self.trigger.join(", "), self.action);

        if !self.description.is_empty() {
            line.push_str(" # ");
            line.push_str(&self.description);
        }

        line
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Which kind of source a `BindingSet` was built from
///
/// Only a set parsed from the default source with modifier capture enabled is
/// `Default`; everything else is `Custom`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BindingMode {
    /// Shipped bindings, protected from user additions
    Default,
    /// User-maintained bindings
    #[default]
    Custom,
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingMode::Default => write!(f, "default"),
            BindingMode::Custom => write!(f, "custom"),
        }
    }
}

/// Tag telling which of the two loaded sets a binding belongs to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Origin {
    Default,
    Custom,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Default => write!(f, "Default"),
            Origin::Custom => write!(f, "Custom"),
        }
    }
}

/// Who is appending a binding to a set
///
/// The parser may populate any set. A user may only append to a `Custom` set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddOrigin {
    Parser,
    User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trigger_tokens() {
        let binding = Binding::new("  SUPER ,RETURN ", "exec, kitty");
        assert_eq!(binding.trigger(), ["SUPER", "RETURN"]);
        assert_eq!(binding.action(), "exec, kitty");
        assert_eq!(binding.description(), "");
    }

    #[test]
    fn test_new_keeps_empty_tokens() {
        let binding = Binding::new(", Print", "exec, grim");
        assert_eq!(binding.trigger(), ["", "Print"]);
        assert_eq!(binding.trigger_key(), ",Print");
    }

    #[test]
    fn test_render_without_description() {
        let binding = Binding::new("SUPER,Q", "killactive");
        assert_eq!(binding.render(), "bind = SUPER, Q, killactive");
    }

    #[test]
    fn test_render_with_description() {
        let binding = Binding::with_description("SUPER,E", "exec, thunar", "File manager");
        assert_eq!(binding.render(), "bind = SUPER, E, exec, thunar # File manager");
        assert_eq!(format!("{}", binding), binding.render());
    }

    #[test]
    fn test_render_is_stable() {
        let binding = Binding::with_description("ALT, TAB", "cyclenext", "Next window");
        assert_eq!(binding.render(), binding.render());
        assert_eq!(binding.clone().render(), binding.render());
    }

    #[test]
    fn test_display_trigger() {
        let binding = Binding::new("$mainMod, SHIFT, Q", "exit");
        assert_eq!(binding.display_trigger(), "$mainMod + SHIFT + Q");
    }

    #[test]
    fn test_mode_display_and_default() {
        assert_eq!(format!("{}", BindingMode::Default), "default");
        assert_eq!(format!("{}", BindingMode::Custom), "custom");
        assert_eq!(BindingMode::default(), BindingMode::Custom);
        assert_eq!(format!("{}", Origin::Default), "Default");
    }
}
