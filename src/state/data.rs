/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the static catalog and the UI layer.

/// Represents a single playable video in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEntry {
    /// Unique catalog ID (e.g., "5")
    pub id: String,
    /// Display title for the card and fallback views
    pub title: String,
    /// Absolute URL of the playable media in the remote bucket
    pub video_url: String,
    /// Root-relative path of the thumbnail asset (e.g., "/6.png")
    pub thumbnail_path: String,
    /// Optional longer description (unused by the current layout)
    pub description: Option<String>,
}
