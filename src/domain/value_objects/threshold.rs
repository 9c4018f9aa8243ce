//! Threshold value object - batch size that triggers an analysis

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Minimum number of distinct files a batch needs before analysis fires.
///
/// Always at least 1; zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    /// One file per batch, the default
    pub const ONE: Threshold = Threshold(NonZeroUsize::MIN);

    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Whether a batch of `len` files is ready to dispatch
    pub fn is_reached(self, len: usize) -> bool {
        len >= self.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<usize> for Threshold {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Threshold::new(value).ok_or_else(|| "threshold must be at least 1".to_string())
    }
}

impl From<Threshold> for usize {
    fn from(value: Threshold) -> Self {
        value.get()
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
