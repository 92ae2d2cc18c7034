use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            color: default_color(),
        }
    }
}

const fn default_color() -> bool { true }

/// On-disk shape of `fileseam.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSeamToml {
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub preferences: Preferences,
}
