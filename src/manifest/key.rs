use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Module key: optional scope "@", a name without "@", then an optional "@version"
    /// Examples: "react", "react@18.2.0", "@babel/core@^7"
    static ref MODULE_KEY_PATTERN: Regex = Regex::new(r"^(@?[^@]+)(?:@(.*))?$").unwrap();
}

/// A module key split into name and optional version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleKey {
    pub name: String,
    pub version: Option<String>,
}

/// Split "name@version" into its parts.
///
/// Malformed keys are logged and returned whole as the name.
pub fn entry_from_key(key: &str) -> ModuleKey {
    match MODULE_KEY_PATTERN.captures(key) {
        Some(caps) => ModuleKey {
            name: caps[1].to_string(),
            version: caps
                .get(2)
                .map(|m| m.as_str())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        },
        None => {
            tracing::warn!(key = key, "Invalid module key");
            ModuleKey {
                name: key.to_string(),
                version: None,
            }
        }
    }
}
