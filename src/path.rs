use std::slice;

use serde::{Deserialize, Serialize};

use crate::step::Step;

/// The fixed ordered sequence of steps a traversal must follow exactly.
///
/// A path is established at construction and never mutated afterwards; only
/// read access is exposed. In JSON a path is a plain array of step names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Step>);

impl Path {
    pub fn new(steps: Vec<Step>) -> Self {
        Path(steps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Step at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Step> {
        self.0.get(index).copied()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Path(steps)
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Step;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Step>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
