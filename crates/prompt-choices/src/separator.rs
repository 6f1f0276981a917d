use std::fmt;

use serde::{Deserialize, Serialize};

/// Line used when a separator is created without text.
pub const DEFAULT_LINE: &str = "────────";

/// Display-only marker placed between choices. Never selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub line: String,
}

impl Separator {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            line: text.unwrap_or(DEFAULT_LINE).to_string(),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
