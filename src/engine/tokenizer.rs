use std::ops::Index;
use std::rc::Rc;

use crate::utils::strings;

/// Ordered display units for one reading session.
///
/// Built once by [`tokenize`] and never mutated; clones share the same storage,
/// so a new session always means a new `Sequence`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    units: Rc<[String]>,
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            units: Rc::from(Vec::new()),
        }
    }
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.units.get(index).map(String::as_str)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.units.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }
}

impl Index<usize> for Sequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.units[index]
    }
}

impl<S: Into<String>> FromIterator<S> for Sequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let units: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self {
            units: units.into(),
        }
    }
}

/// Splits on runs of whitespace or hyphens. Hyphenated compounds become separate
/// units and punctuation stays attached to its neighbour.
pub fn tokenize(text: &str) -> Sequence {
    text.trim()
        .split(strings::is_separator)
        .filter(|s| !s.is_empty())
        .collect()
}
