//! Entry entity representing a shorthand to target URL mapping.

/// A single registry entry.
///
/// `shorthand` is the unique key a client requests; `target` is the URL it
/// redirects to. The target is stored as given and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub shorthand: String,
    pub target: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(shorthand: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            shorthand: shorthand.into(),
            target: target.into(),
        }
    }
}

/// Strips every leading `/` from a requested key.
///
/// Redirect requests arrive as request paths, so `"/foo"`, `"//foo"` and
/// `"foo"` all address the same entry.
pub fn clean_key(key: &str) -> &str {
    key.trim_start_matches('/')
}
