use crate::dom::tags::DEFAULT_CATEGORY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub tags: TagConfig,

    #[serde(default)]
    pub dependencies: DependencyConfig,
}

// Defaults for the magnitude formatter
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub sig: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagConfig {
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DependencyConfig {
    // Manifest categories to flatten, in order
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default)]
    pub level: u32,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            level: 0,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_include() -> Vec<String> {
    vec![
        "dependencies".to_string(),
        "devDependencies".to_string(),
        "peerDependencies".to_string(),
    ]
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            format: FormatConfig::default(),
            tags: TagConfig::default(),
            dependencies: DependencyConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
