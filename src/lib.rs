//! Loader for YouTube mixes (auto-generated playlists) built on the watch
//! page's pbj payload. The HTTP transport and the playable-track type are
//! both supplied by the caller.

pub mod models;
pub mod source;
pub mod util;

pub use models::{DURATION_MS_UNKNOWN, MixPlaylist, TrackInfo};
pub use source::youtube::mix::YoutubeMix;
pub use util::errors::MixError;
pub use util::http::{HttpExecutor, HttpResponse};
