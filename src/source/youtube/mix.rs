use std::collections::HashMap;

use tracing::debug;

use super::common::{artwork_url, parse_duration_text, watch_url};
use crate::models::{DURATION_MS_UNKNOWN, MixPlaylist, TrackInfo};
use crate::util::errors::MixError;
use crate::util::http::HttpExecutor;
use crate::util::json::JsonNode;

const DEFAULT_PLAYLIST_TITLE: &str = "YouTube mix";

/// Loads YouTube mixes (auto-generated playlists) from the watch page's
/// pbj payload.
pub struct YoutubeMix<H> {
    http: H,
}

impl<H: HttpExecutor> YoutubeMix<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Fetches the mix page and rebuilds the playlist in presentation
    /// order. `factory` maps each entry's metadata into the caller's track
    /// type; `selected_video_id` picks the entry the playlist considers
    /// current, by exact identifier match.
    pub async fn load<T>(
        &self,
        mix_id: &str,
        selected_video_id: Option<&str>,
        mut factory: impl FnMut(TrackInfo) -> T,
    ) -> Result<MixPlaylist<T>, MixError> {
        let url = mix_url(mix_id, selected_video_id);
        let response = self.http.get(&url).await?;

        if !response.status.is_success() {
            return Err(MixError::FailedStatusCode(response.status));
        }
        if response.body.is_empty() {
            return Err(MixError::EmptyResponse);
        }

        let body: serde_json::Value = serde_json::from_slice(&response.body)?;
        let playlist = JsonNode::new(&body)
            .index(3)
            .get("response")
            .get("contents")
            .get("twoColumnWatchNextResults")
            .get("playlist")
            .get("playlist");

        let title = playlist
            .get("title")
            .text()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_PLAYLIST_TITLE.to_string());

        let mut identifiers = Vec::new();
        let mut tracks = Vec::new();

        for entry in playlist.get("contents").values() {
            let Some(info) = extract_entry(entry) else {
                continue;
            };
            identifiers.push(info.identifier.clone());
            tracks.push(factory(info));
        }

        if tracks.is_empty() {
            return Err(MixError::NoTracksFound);
        }

        let selected = selected_video_id
            .and_then(|id| identifiers.iter().position(|identifier| identifier == id));

        Ok(MixPlaylist {
            title,
            tracks,
            selected,
            is_search_result: false,
        })
    }
}

fn mix_url(mix_id: &str, selected_video_id: Option<&str>) -> String {
    match selected_video_id {
        Some(id) => format!(
            "https://www.youtube.com/watch?v={}&list={}&pbj=1",
            urlencoding::encode(id),
            urlencoding::encode(mix_id)
        ),
        None => format!(
            "https://www.youtube.com/watch?list={}&pbj=1",
            urlencoding::encode(mix_id)
        ),
    }
}

/// One panel entry to metadata. Entries missing an identifier have no
/// stable key to select or dedupe on; entries missing a title have nothing
/// to display. Both are skipped, the loop continues. A missing author is
/// kept as an empty string.
fn extract_entry(entry: JsonNode<'_>) -> Option<TrackInfo> {
    let renderer = entry.get("playlistPanelVideoRenderer");

    let Some(identifier) = renderer.get("videoId").text() else {
        debug!("Skipping mix entry without a videoId");
        return None;
    };
    let Some(title) = renderer.get("title").get("simpleText").text() else {
        debug!("Skipping mix entry [{}] without a title", identifier);
        return None;
    };

    let author = renderer
        .get("longBylineText")
        .get("runs")
        .index(0)
        .get("text")
        .text()
        .unwrap_or_default();

    let length = renderer
        .get("lengthText")
        .get("simpleText")
        .text()
        .map(parse_duration_text)
        .unwrap_or(DURATION_MS_UNKNOWN);

    Some(TrackInfo {
        title: title.to_string(),
        author: author.to_string(),
        length,
        identifier: identifier.to_string(),
        is_stream: false,
        uri: watch_url(identifier),
        extensions: Some(HashMap::from([(
            "artworkUrl".to_string(),
            artwork_url(identifier),
        )])),
    })
}
