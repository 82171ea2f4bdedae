use iced_video_player::Video;
use thiserror::Error;

/// Errors that can occur while mounting the overlay video pipeline
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The catalog carried a source that is not a valid absolute URL
    #[error("invalid video source: {url}")]
    InvalidUrl { url: String },
    /// GStreamer could not build a playable pipeline for the source
    #[error("failed to open video pipeline: {0}")]
    Backend(#[from] iced_video_player::Error),
}

/// Create the looping pipeline for a catalog entry's remote source.
///
/// The source is treated as opaque playable media: format negotiation,
/// buffering and range handling are all delegated to GStreamer. The
/// pipeline starts unpaused, so playback begins as soon as the overlay
/// widget mounts.
pub fn open(video_url: &str) -> Result<Video, PlayerError> {
    let url = reqwest::Url::parse(video_url).map_err(|_| PlayerError::InvalidUrl {
        url: video_url.to_string(),
    })?;

    let mut video = Video::new(&url)?;
    video.set_looping(true);
    video.set_paused(false);

    Ok(video)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_source() {
        // Relative paths never reach GStreamer; they fail URL parsing first
        let result = open("/videos/clip.mp4");
        assert!(matches!(result, Err(PlayerError::InvalidUrl { .. })));
    }
}
