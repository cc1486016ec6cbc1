use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_PREFIX: &str = "zui";

/// Knobs for a compile. Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Prefix of the registered custom element tag (`<prefix>-<name>_<hash>`).
    pub tag_prefix: String,
    /// Reject documents the markup parser had to recover from.
    pub strict_markup: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            strict_markup: false,
        }
    }
}

impl CompileOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
