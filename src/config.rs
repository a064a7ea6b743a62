//! Matcher configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Leniency flags for the matcher.
///
/// `smart` only takes effect when `multi` and `translit` are both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Matched query characters must be contiguous in the candidate.
    pub strict: bool,
    /// Case-insensitive matching (Unicode-aware, covers Cyrillic).
    pub ignorecase: bool,
    /// Each query character may also match its Cyrillic/Latin
    /// transliteration counterpart.
    pub translit: bool,
    /// Each query character may also match the character the same physical
    /// key produces under the other keyboard layout.
    pub multi: bool,
    /// Additionally match the transliteration of the layout-mapped
    /// character, for queries typed under both a wrong layout and a wrong
    /// script.
    pub smart: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strict: true,
            ignorecase: false,
            translit: false,
            multi: false,
            smart: false,
        }
    }
}

impl MatcherConfig {
    /// Every recognized option name, in declaration order.
    pub const OPTION_NAMES: [&'static str; 5] =
        ["strict", "ignorecase", "translit", "multi", "smart"];

    /// Sets an option by name. Unknown names are rejected rather than
    /// silently stored.
    pub fn set(&mut self, name: &str, value: bool) -> Result<()> {
        match name {
            "strict" => self.strict = value,
            "ignorecase" => self.ignorecase = value,
            "translit" => self.translit = value,
            "multi" => self.multi = value,
            "smart" => self.smart = value,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unknown option `{name}`"
                )));
            }
        }
        Ok(())
    }

    /// Reads an option by name. Returns `None` for unknown names.
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "strict" => Some(self.strict),
            "ignorecase" => Some(self.ignorecase),
            "translit" => Some(self.translit),
            "multi" => Some(self.multi),
            "smart" => Some(self.smart),
            _ => None,
        }
    }
}
