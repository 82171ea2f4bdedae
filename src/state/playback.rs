use super::data::VideoEntry;

/// The three reachable states of the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No video selected; the catalog grid is showing
    Idle,
    /// A video is selected and the overlay is playing it
    Playing,
    /// A video is selected and playback is paused
    Paused,
}

/// Transient playback selection owned by the top-level controller.
///
/// At most one entry is selected at a time. The paused flag is only
/// meaningful while a selection exists; closing always clears both
/// together, so a paused flag can never outlive its selection.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    selected: Option<VideoEntry>,
    paused: bool,
}

impl Playback {
    /// Start in the idle state (grid showing, nothing selected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a video for full-screen playback.
    /// The overlay autoplays, so the paused flag starts cleared.
    pub fn select(&mut self, entry: VideoEntry) {
        self.selected = Some(entry);
        self.paused = false;
    }

    /// Clear the selection and the paused flag, regardless of prior
    /// state. Safe to call while already idle.
    pub fn close(&mut self) {
        self.selected = None;
        self.paused = false;
    }

    /// Sync the paused flag to the pipeline state observed at toggle
    /// time. Ignored while idle, preserving the invariant above.
    pub fn set_paused(&mut self, paused: bool) {
        if self.selected.is_some() {
            self.paused = paused;
        }
    }

    /// The currently selected entry, if any
    pub fn selected(&self) -> Option<&VideoEntry> {
        self.selected.as_ref()
    }

    /// Whether playback is currently paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current position in the three-state machine
    pub fn state(&self) -> PlayerState {
        match (&self.selected, self.paused) {
            (None, _) => PlayerState::Idle,
            (Some(_), false) => PlayerState::Playing,
            (Some(_), true) => PlayerState::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(id: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            title: format!("Video {}", id),
            video_url: format!("https://videos.example/{}.mp4", id),
            thumbnail_path: format!("/{}.png", id),
            description: None,
        }
    }

    #[test]
    fn test_starts_idle() {
        let playback = Playback::new();
        assert_eq!(playback.state(), PlayerState::Idle);
        assert!(playback.selected().is_none());
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_select_starts_playing() {
        let mut playback = Playback::new();
        playback.select(sample_entry("5"));

        assert_eq!(playback.state(), PlayerState::Playing);
        assert_eq!(playback.selected().unwrap().id, "5");
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_select_then_close_returns_to_idle() {
        let mut playback = Playback::new();
        playback.select(sample_entry("3"));
        playback.close();

        assert_eq!(playback.state(), PlayerState::Idle);
        assert!(playback.selected().is_none());
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_pause_round_trip() {
        let mut playback = Playback::new();
        playback.select(sample_entry("1"));

        playback.set_paused(true);
        assert_eq!(playback.state(), PlayerState::Paused);

        playback.set_paused(false);
        assert_eq!(playback.state(), PlayerState::Playing);
    }

    #[test]
    fn test_close_clears_paused_flag() {
        let mut playback = Playback::new();
        playback.select(sample_entry("2"));
        playback.set_paused(true);

        playback.close();
        assert_eq!(playback.state(), PlayerState::Idle);
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_close_while_idle_is_noop() {
        let mut playback = Playback::new();
        playback.close();
        assert_eq!(playback.state(), PlayerState::Idle);
    }

    #[test]
    fn test_paused_cannot_be_set_while_idle() {
        let mut playback = Playback::new();
        playback.set_paused(true);

        assert_eq!(playback.state(), PlayerState::Idle);
        assert!(!playback.is_paused());
    }

    #[test]
    fn test_reselect_resets_paused_flag() {
        let mut playback = Playback::new();
        playback.select(sample_entry("1"));
        playback.set_paused(true);

        playback.select(sample_entry("2"));
        assert_eq!(playback.state(), PlayerState::Playing);
        assert_eq!(playback.selected().unwrap().id, "2");
    }
}
