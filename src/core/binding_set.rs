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


//! src/core/binding_set.rs
//!
//! Ordered, mutable collection of bindings loaded from one source
//!
//! A `BindingSet` keeps bindings in file order (or add order). Duplicate
//! triggers are kept side by side; uniqueness is answered by a query
//! (`check_unique`), never enforced on insert.
//!
//! # Mode gate
//! A set whose mode is `Default` refuses user additions. The parser may
//! still fill it, since loading the default source must be possible.

use tracing::warn;

use crate::core::{
    combo::normalize_trigger,
    types::{AddOrigin, Binding, BindingMode},
};

/// Bindings from a single configuration source
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BindingSet {
    bindings: Vec<Binding>,
    modifier_alias: String,
    mode: BindingMode,
}

impl BindingSet {
    /// Creates an empty `Custom` set with no modifier alias.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with initial contents, alias and mode.
    pub fn with_parts(bindings: Vec<Binding>, modifier_alias: &str, mode: BindingMode) -> Self {
        Self {
            bindings,
            modifier_alias: modifier_alias.to_string(),
            mode,
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// Value bound to `$mainMod` in the default source, empty otherwise.
    pub fn modifier_alias(&self) -> &str {
        &self.modifier_alias
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Returns every binding whose trigger equals `combination` after
    /// normalisation. Token order matters: `SUPER,Q` never matches `Q,SUPER`.
    pub fn find_by_trigger(&self, combination: &str) -> Vec<&Binding> {
        let wanted = normalize_trigger(combination);

        self.bindings
            .iter()
            .filter(|binding| binding.trigger_key() == wanted)
            .collect()
    }

    /// Checks whether `combination` is free in this set.
    ///
    /// Returns `(true, [])` when nothing matches, otherwise `(false, conflicts)`
    /// with the matching bindings in set order.
    ///
    /// # Example
    /// ```
    /// use hyprbind::core::{AddOrigin, Binding, BindingSet};
    ///
    /// let mut set = BindingSet::new();
    /// set.add_binding(Binding::new("SUPER, Q", "killactive"), AddOrigin::User);
    ///
    /// let (unique, conflicts) = set.check_unique("SUPER, Q");
    /// assert!(!unique);
    /// assert_eq!(conflicts.len(), 1);
    /// assert!(set.check_unique("Q, SUPER").0);
    /// ```
    pub fn check_unique(&self, combination: &str) -> (bool, Vec<&Binding>) {
        let conflicts = self.find_by_trigger(combination);
        (conflicts.is_empty(), conflicts)
    }

    /// Appends a binding.
    ///
    /// Refused (returns `false`, set unchanged) when the set is not `Custom`
    /// and the call comes from a user rather than the parser.
    pub fn add_binding(&mut self, binding: Binding, origin: AddOrigin) -> bool {
        if self.mode != BindingMode::Custom && origin != AddOrigin::Parser {
            warn!(binding = %binding, mode = %self.mode, "refusing user add to non-custom set");
            return false;
        }

        self.bindings.push(binding);
        true
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// An empty (or whitespace-only) query returns every binding.
    pub fn search_description(&self, query: &str) -> Vec<&Binding> {
        let query = query.trim().to_lowercase();

        self.bindings
            .iter()
            .filter(|binding| {
                query.is_empty() || binding.description().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Renders the whole set as dialect text, one `bind` line per binding.
    pub fn render(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| format!("{}\n", binding.render()))
            .collect()
    }

    /// Parser-only setter for the `$mainMod` capture.
    pub(crate) fn set_mode(&mut self, mode: BindingMode, modifier_alias: &str) {
        self.mode = mode;
        self.modifier_alias = modifier_alias.to_string();
    }
}

impl<'a> IntoIterator for &'a BindingSet {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
