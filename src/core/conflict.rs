//! Cross-set keybinding queries
//!
//! The default and custom sets are loaded independently and never merged.
//! This module answers questions over both at once:
//! - `project`: every binding tagged with the set it came from
//! - `check_combination`: whether a combination is free in both sets
//! - `search`: description search across both sets
//! - `ConflictDetector`: every trigger bound more than once
//!
//! All of these are read-only; the sets are only borrowed.

use std::collections::HashMap;
use std::fmt;

use crate::core::{
    binding_set::BindingSet,
    types::{Binding, Origin},
};

/// A binding paired with the set it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaggedBinding<'a> {
    pub origin: Origin,
    pub binding: &'a Binding,
}

impl fmt::Display for TaggedBinding<'_> {
    /// `[Default] SUPER,Q -> killactive (Close window)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}",
            self.origin,
            self.binding.trigger_key(),
            self.binding.action()
        )?;

        if !self.binding.description().is_empty() {
            write!(f, " ({})", self.binding.description())?;
        }

        Ok(())
    }
}

fn tag<'a>(origin: Origin, bindings: impl IntoIterator<Item = &'a Binding>) -> impl Iterator<Item = TaggedBinding<'a>> {
    bindings
        .into_iter()
        .map(move |binding| TaggedBinding { origin, binding })
}

/// Lists the default set followed by the custom set, each in set order.
pub fn project<'a>(default: &'a BindingSet, custom: &'a BindingSet) -> Vec<TaggedBinding<'a>> {
    tag(Origin::Default, default)
        .chain(tag(Origin::Custom, custom))
        .collect()
}

/// Checks `combination` against both sets.
///
/// The result is empty when the combination is free everywhere. Default
/// conflicts come before custom ones.
pub fn check_combination<'a>(
    default: &'a BindingSet,
    custom: &'a BindingSet,
    combination: &str,
) -> Vec<TaggedBinding<'a>> {
    let (_, default_conflicts) = default.check_unique(combination);
    let (_, custom_conflicts) = custom.check_unique(combination);

    tag(Origin::Default, default_conflicts)
        .chain(tag(Origin::Custom, custom_conflicts))
        .collect()
}

/// Description search over both sets. An empty query lists everything.
pub fn search<'a>(default: &'a BindingSet, custom: &'a BindingSet, query: &str) -> Vec<TaggedBinding<'a>> {
    tag(Origin::Default, default.search_description(query))
        .chain(tag(Origin::Custom, custom.search_description(query)))
        .collect()
}

/// A trigger bound more than once across the loaded sets
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict<'a> {
    /// Normalised trigger (`SUPER,Q`)
    pub trigger: String,

    /// All bindings using this trigger (always 2 or more)
    pub conflicting_bindings: Vec<TaggedBinding<'a>>,
}

/// Groups bindings by normalised trigger to find duplicates.
///
/// Triggers are reported in the order they first appear (default set
/// first), so output is stable across runs.
#[derive(Debug, Default)]
pub struct ConflictDetector<'a> {
    /// Index into `groups` for each trigger
    index: HashMap<String, usize>,
    groups: Vec<Conflict<'a>>,
}

impl<'a> ConflictDetector<'a> {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a detector over both sets.
    pub fn from_sets(default: &'a BindingSet, custom: &'a BindingSet) -> Self {
        let mut detector = Self::new();
        for tagged in project(default, custom) {
            detector.add_binding(tagged);
        }
        detector
    }

    /// Adds a binding to the detector.
    pub fn add_binding(&mut self, tagged: TaggedBinding<'a>) {
        let trigger = tagged.binding.trigger_key();

        match self.index.get(&trigger) {
            Some(&slot) => self.groups[slot].conflicting_bindings.push(tagged),
            None => {
                self.index.insert(trigger.clone(), self.groups.len());
                self.groups.push(Conflict {
                    trigger,
                    conflicting_bindings: vec![tagged],
                });
            }
        }
    }

    /// Finds all triggers with 2 or more bindings.
    pub fn find_conflicts(&self) -> Vec<Conflict<'a>> {
        self.groups
            .iter()
            .filter(|group| group.conflicting_bindings.len() > 1)
            .cloned()
            .collect()
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.conflicting_bindings.len())
            .sum()
    }
}
