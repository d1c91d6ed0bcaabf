//! Clipboard data value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Plain text format key
pub const TEXT_PLAIN: &str = "text/plain";

/// HTML format key
pub const TEXT_HTML: &str = "text/html";

/// A single typed clipboard item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem<'a> {
    pub format: &'a str,
    pub value: &'a str,
}

/// Key-typed clipboard data carrier.
///
/// Maps a format string (`text/plain`, `text/html`, ...) to its value. Used both
/// as the external buffer carried by a [`super::ClipboardEvent`] and as the
/// payload stored in the internal clipboard cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipboardData {
    items: BTreeMap<String, String>,
}

impl ClipboardData {
    /// Create empty clipboard data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create clipboard data holding a single `text/plain` item
    pub fn text(value: impl Into<String>) -> Self {
        let mut data = Self::new();
        data.set(TEXT_PLAIN, value);
        data
    }

    /// Set the value for a format, replacing any previous value
    pub fn set(&mut self, format: impl Into<String>, value: impl Into<String>) {
        self.items.insert(format.into(), value.into());
    }

    /// Get the value stored for a format
    pub fn get(&self, format: &str) -> Option<&str> {
        self.items.get(format).map(String::as_str)
    }

    /// Shorthand for the `text/plain` item
    pub fn plain_text(&self) -> Option<&str> {
        self.get(TEXT_PLAIN)
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over typed items in format order
    pub fn items(&self) -> impl Iterator<Item = ClipboardItem<'_>> {
        self.items.iter().map(|(format, value)| ClipboardItem {
            format: format.as_str(),
            value: value.as_str(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for ClipboardData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
