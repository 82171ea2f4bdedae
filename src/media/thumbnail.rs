use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::data::VideoEntry;

/// Local directory that serves the catalog's root-relative asset paths
const ASSET_ROOT: &str = "assets";

/// Longest edge of a decoded thumbnail, in pixels.
/// Cards are half a window wide, so anything larger is wasted memory.
const THUMBNAIL_MAX_EDGE: u32 = 512;

/// Errors that can occur while preparing a single thumbnail
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("could not read thumbnail file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode thumbnail: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolve a root-relative thumbnail path (e.g. "/6.png") against the
/// local asset root
pub fn resolve_asset(thumbnail_path: &str) -> PathBuf {
    Path::new(ASSET_ROOT).join(thumbnail_path.trim_start_matches('/'))
}

/// Load and decode the thumbnails for every catalog entry.
///
/// Runs as a background task at startup so the grid appears immediately
/// and fills in as decodes finish. Entries whose thumbnail is missing or
/// undecodable are skipped; the grid keeps a placeholder card for them.
pub async fn load_catalog_thumbnails(entries: Vec<VideoEntry>) -> Vec<(String, Handle)> {
    let mut handles = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = resolve_asset(&entry.thumbnail_path);
        match load_thumbnail(&path).await {
            Ok(handle) => handles.push((entry.id, handle)),
            Err(e) => eprintln!(
                "⚠️  No thumbnail for '{}' ({}): {}",
                entry.title,
                path.display(),
                e
            ),
        }
    }

    println!("🖼  Loaded {} thumbnails", handles.len());
    handles
}

/// Read, decode and downscale a single thumbnail file
async fn load_thumbnail(path: &Path) -> Result<Handle, ThumbnailError> {
    let bytes = tokio::fs::read(path).await?;
    let decoded = image::load_from_memory(&bytes)?;

    // Bound the decoded size; the source PNGs are full-size screenshots
    let scaled = if decoded.width() > THUMBNAIL_MAX_EDGE || decoded.height() > THUMBNAIL_MAX_EDGE {
        decoded.resize(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgba = scaled.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_relative_path() {
        assert_eq!(resolve_asset("/6.png"), PathBuf::from("assets/6.png"));
    }

    #[test]
    fn test_resolve_bare_path() {
        assert_eq!(resolve_asset("6.png"), PathBuf::from("assets/6.png"));
    }
}
