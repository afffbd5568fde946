use serde::Serialize;
use serde_json::Value;

/// The primary category, the only one followed past the first level
pub const PRIMARY_CATEGORY: &str = "dependencies";

/// One declared dependency, tagged with the category it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub name: String,
    /// Version range; absent when the manifest value is not a string
    pub version: Option<String>,
    pub category: String,
}

impl DependencyEntry {
    pub fn new(name: &str, version: Option<&str>, category: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.map(str::to_string),
            category: category.to_string(),
        }
    }
}

/// Unwrap registry documents that carry the manifest under `package`
fn manifest_root(pkg: &Value) -> &Value {
    match pkg.get("package") {
        Some(inner) if is_truthy(inner) => inner,
        _ => pkg,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Flatten the requested dependency categories of a manifest into entries.
///
/// Categories are visited in `includes` order and entries keep declaration
/// order within a category. Past the first level (`level > 0`) only the
/// primary "dependencies" category is followed.
pub fn get_dependency_entries<S: AsRef<str>>(
    pkg: &Value,
    includes: &[S],
    level: u32,
) -> Vec<DependencyEntry> {
    let pkg = manifest_root(pkg);
    let mut deps = Vec::new();

    for category in includes {
        let category = category.as_ref();

        let declared = match pkg.get(category) {
            Some(value) if is_truthy(value) => value,
            _ => continue,
        };

        if level > 0 && category != PRIMARY_CATEGORY {
            continue;
        }

        if let Value::Object(map) = declared {
            deps.extend(
                map.iter()
                    .map(|(name, version)| DependencyEntry::new(name, version.as_str(), category)),
            );
        }
    }

    deps
}
