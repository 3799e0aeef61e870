use serde_json::{Map, Value};

use crate::state::album::{Album, AlbumStore};

/// Return the full sequence in insertion order.
pub fn list(store: &AlbumStore) -> Vec<Album> {
    let albums = store.read().unwrap();
    albums.clone()
}

/// Return the first album whose id matches.
pub fn get(store: &AlbumStore, id: &str) -> Option<Album> {
    let albums = store.read().unwrap();
    albums.iter().find(|a| a.id == id).cloned()
}

/// Append a new album to the end of the sequence.
///
/// No uniqueness check on id: a colliding id is accepted and simply
/// shadowed by the earlier entry on lookup.
pub fn create(store: &AlbumStore, album: Album) -> Album {
    let mut albums = store.write().unwrap();
    albums.push(album.clone());
    album
}

/// Patch the first album matching `id` with the given key/value payload.
///
/// Each pair is admitted or skipped per `Album::apply_field`; the updated
/// record is returned even when every pair was skipped. `None` if no
/// album matches.
pub fn update(store: &AlbumStore, id: &str, patch: &Map<String, Value>) -> Option<Album> {
    let mut albums = store.write().unwrap();
    let album = albums.iter_mut().find(|a| a.id == id)?;

    for (key, value) in patch {
        album.apply_field(key, value);
    }

    Some(album.clone())
}

/// Number of albums currently stored.
pub fn count(store: &AlbumStore) -> usize {
    let albums = store.read().unwrap();
    albums.len()
}

/// Remove the first album matching `id`, preserving the order of the rest.
/// Returns false if no album matches.
pub fn delete(store: &AlbumStore, id: &str) -> bool {
    let mut albums = store.write().unwrap();
    match albums.iter().position(|a| a.id == id) {
        Some(i) => {
            albums.remove(i);
            true
        }
        None => false,
    }
}
