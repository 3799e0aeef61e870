use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record album in the catalog.
///
/// `id` is externally assigned and used as the lookup key. Nothing
/// enforces uniqueness: lookups always take the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Shared album store used across the app.
///
/// The lock guards every read and write of the sequence, so concurrent
/// requests cannot corrupt it or lose updates.
pub type AlbumStore = Arc<RwLock<Vec<Album>>>;

/// Create the store with its three seed entries.
pub fn seed_store() -> AlbumStore {
    Arc::new(RwLock::new(vec![
        Album {
            id: "1".to_string(),
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        },
        Album {
            id: "2".to_string(),
            title: "Jeru".to_string(),
            artist: "Gerry Mulligan".to_string(),
            price: 17.99,
        },
        Album {
            id: "3".to_string(),
            title: "Sarah Vaughan and Clifford Brown".to_string(),
            artist: "Sarah Vaughan".to_string(),
            price: 39.99,
        },
    ]))
}

impl Album {
    /// Apply one key/value pair from a patch payload.
    ///
    /// The key is admitted only if its first-letter-capitalized form is one
    /// of `ID`, `Title`, `Artist`, `Price` (so `title` and `Title` both
    /// patch the title, while `id` does NOT reach `ID`), and the value only
    /// if its JSON type matches the field type exactly: strings for the
    /// string fields, numbers for `price`. Anything else is skipped
    /// silently; there is no partial-failure report.
    pub fn apply_field(&mut self, key: &str, value: &Value) {
        match capitalize_first(key).as_str() {
            "ID" => {
                if let Some(s) = value.as_str() {
                    self.id = s.to_string();
                }
            }
            "Title" => {
                if let Some(s) = value.as_str() {
                    self.title = s.to_string();
                }
            }
            "Artist" => {
                if let Some(s) = value.as_str() {
                    self.artist = s.to_string();
                }
            }
            "Price" => {
                if let Some(n) = value.as_f64() {
                    self.price = n;
                }
            }
            _ => {}
        }
    }
}

fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
