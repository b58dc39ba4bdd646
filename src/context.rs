use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Named boolean facts consulted during evaluation.
///
/// Unset names read as `false`. There is no removal; a binding can only be
/// overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    variables: HashMap<String, bool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value bound to `name`.
    pub fn set_variable(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        tracing::trace!(%name, value, "set variable");
        self.variables.insert(name, value);
    }

    /// Bound value of `name`, or `false` if it was never set.
    pub fn get_variable(&self, name: &str) -> bool {
        match self.variables.get(name) {
            Some(&value) => {
                tracing::trace!(name, value, "lookup");
                value
            }
            None => {
                tracing::trace!(name, "lookup of unset variable, defaulting to false");
                false
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted = self.variables.iter().sorted_by(|a, b| a.0.cmp(b.0));
        write!(
            f,
            "{}",
            sorted.format_with(", ", |(name, value), out| out(&format_args!("{name}={value}")))
        )
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Context {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        ctx.extend(iter);
        ctx
    }
}

impl<S: Into<String>> Extend<(S, bool)> for Context {
    fn extend<I: IntoIterator<Item = (S, bool)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set_variable(name, value);
        }
    }
}

impl IntoIterator for Context {
    type Item = (String, bool);
    type IntoIter = std::collections::hash_map::IntoIter<String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_iter()
    }
}
