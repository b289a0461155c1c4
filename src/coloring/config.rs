use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringConfig {
    /// Try a Kempe-chain interchange before opening a new color. Plain first fit when off.
    pub interchange: bool,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self { interchange: true }
    }
}

impl ColoringConfig {
    /// Plain first-fit coloring, no interchange.
    pub fn first_fit() -> Self {
        Self { interchange: false }
    }
}
