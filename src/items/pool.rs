use crate::pools::errors::PoolError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Flavor items, cleaned up on load so every entry is distinct.
#[derive(Clone, Debug)]
pub struct ItemPool {
    items: Vec<String>,
}

impl ItemPool {
    pub fn new<I, S>(items: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::new();
        for item in items {
            let item = strip_catalogue_tag(item.as_ref().trim());
            if item.is_empty() || !seen.insert(item.to_string()) {
                continue;
            }
            cleaned.push(item.to_string());
        }
        if cleaned.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { items: cleaned })
    }

    pub fn load(path: &Path) -> Result<Self, PoolError> {
        let raw = fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Expects a JSON array of strings.
    pub fn parse(raw: &str) -> Result<Self, PoolError> {
        let items: Vec<String> = serde_json::from_str(raw).map_err(|err| PoolError::Malformed {
            position: err.line(),
            reason: err.to_string(),
        })?;
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

/// `"Rubber duck #412"` -> `"Rubber duck"`.
fn strip_catalogue_tag(item: &str) -> &str {
    if let Some((head, tag)) = item.rsplit_once('#') {
        let tag_is_number = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_digit());
        if tag_is_number && head.ends_with(char::is_whitespace) {
            return head.trim_end();
        }
    }
    item
}
