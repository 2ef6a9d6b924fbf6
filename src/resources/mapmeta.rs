//! Map note metadata.
//!
//! Map notes carry `<key:value>` and `<key>` tags. [`MapMeta`] holds the
//! parsed tags and reads the camera bound defaults (`minX`, `maxX`, `minY`,
//! `maxY`) from them.

use log::warn;
use rustc_hash::FxHashMap;

/// A single parsed tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// `<key>` with no value.
    Flag,
    /// `<key:value>`.
    Text(String),
}

/// Tags parsed from a map note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapMeta {
    pub tags: FxHashMap<String, MetaValue>,
}

impl MapMeta {
    /// Parse every `<key>` / `<key:value>` group in `note`.
    ///
    /// Keys may not contain `<`, `>` or `:`; values run up to the next `>`.
    /// Later tags override earlier ones with the same key.
    pub fn parse(note: &str) -> Self {
        let mut tags = FxHashMap::default();
        let mut rest = note;
        while let Some(open) = rest.find('<') {
            rest = &rest[open + 1..];
            let Some(end) = rest.find(['<', '>', ':']) else {
                break;
            };
            let key = &rest[..end];
            if key.is_empty() {
                continue;
            }
            match rest.as_bytes()[end] {
                b'>' => {
                    tags.insert(key.to_string(), MetaValue::Flag);
                    rest = &rest[end + 1..];
                }
                b':' => {
                    let Some(close) = rest[end + 1..].find('>') else {
                        break;
                    };
                    let value = &rest[end + 1..end + 1 + close];
                    tags.insert(key.to_string(), MetaValue::Text(value.to_string()));
                    rest = &rest[end + 1 + close + 1..];
                }
                // Nested '<': retry from there.
                _ => rest = &rest[end..],
            }
        }
        MapMeta { tags }
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.tags.get(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// Read a numeric tag.
    ///
    /// Absent tags and tags without a numeric value return `None`, so callers
    /// can tell a declared `0` apart from a missing tag.
    pub fn integer(&self, key: &str) -> Option<i32> {
        match self.tags.get(key)? {
            MetaValue::Flag => None,
            MetaValue::Text(raw) => {
                let trimmed = raw.trim();
                if let Ok(value) = trimmed.parse::<i32>() {
                    return Some(value);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => Some(value.trunc() as i32),
                    _ => {
                        warn!("Ignoring non-numeric map tag <{}:{}>", key, raw);
                        None
                    }
                }
            }
        }
    }
}
