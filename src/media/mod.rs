/// Media handling module
///
/// This module handles everything that touches decoded media:
/// - Loading and downscaling thumbnail assets (thumbnail.rs)
/// - Building the overlay video pipeline (player.rs)

pub mod player;
pub mod thumbnail;
