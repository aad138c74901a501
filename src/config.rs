use serde::{Deserialize, Serialize};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Prompt shown before each command line
    pub prompt: String,

    /// Whether to colorize terminal output
    pub use_color: bool,

    /// Importance assigned to notes created without an explicit level
    pub default_importance: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "notebook>".to_string(),
            use_color: true,
            default_importance: "MEDIUM".to_string(),
        }
    }
}

impl Config {
    // Smart fallback: explicit value wins, otherwise the configured default
    pub fn importance_or_default(&self, importance: Option<String>) -> String {
        importance.unwrap_or_else(|| self.default_importance.clone())
    }
}
