use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved track length meaning "duration unknown or live stream".
/// Distinct from zero, which is a real (if odd) duration.
pub const DURATION_MS_UNKNOWN: u64 = u64::MAX;

/// Metadata for one playable item, plus an open-ended extension map for
/// source specific extras such as artwork.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub title: String,
    /// May be empty when the source does not expose an author.
    pub author: String,
    /// Milliseconds, or [`DURATION_MS_UNKNOWN`].
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<HashMap<String, String>>,
}

impl TrackInfo {
    /// Reads an extension value. A missing key is `None`, which is not the
    /// same thing as a key mapped to an empty string.
    pub fn extension(&self, key: &str) -> Option<&str> {
        self.extensions.as_ref()?.get(key).map(String::as_str)
    }

    pub fn artwork_url(&self) -> Option<&str> {
        self.extension("artworkUrl")
    }
}

/// Result of loading a mix. `tracks` keeps the source presentation order;
/// `selected` is an index into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixPlaylist<T> {
    pub title: String,
    pub tracks: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    pub is_search_result: bool,
}

impl<T> MixPlaylist<T> {
    pub fn selected_track(&self) -> Option<&T> {
        self.tracks.get(self.selected?)
    }
}
