/// UI building blocks
///
/// - The paginated catalog grid (grid.rs)
/// - The full-screen playback overlay (overlay.rs)
/// - Canvas-drawn vector icons (icons.rs)

pub mod grid;
pub mod icons;
pub mod overlay;
