/// Page-lifecycle analytics collaborator
///
/// Mirrors the tracker mounted alongside the page root: the UI feeds it
/// lifecycle events and nothing ever flows back. Events are wrapped in a
/// JSON envelope and posted fire-and-forget to the collector; with no
/// collector configured they are echoed to stdout instead. Delivery
/// failures never disturb the UI.

use chrono::Utc;
use serde::Serialize;

/// Remote collector endpoint. `None` echoes events to stdout.
const COLLECTOR_ENDPOINT: Option<&str> = None;

/// Application tag attached to every envelope
const APP_TAG: &str = "videx";

/// Lifecycle events observed by the page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The page was opened
    PageView,
    /// A video was selected for full-screen playback
    VideoOpened { id: String },
    /// The playback overlay was dismissed
    VideoClosed { id: String },
}

/// Wire format for a single reported event
#[derive(Debug, Serialize)]
struct Envelope {
    app: &'static str,
    recorded_at: i64,
    #[serde(flatten)]
    event: Event,
}

/// Report one lifecycle event, best effort.
pub async fn report(event: Event) {
    let envelope = Envelope {
        app: APP_TAG,
        recorded_at: Utc::now().timestamp(),
        event,
    };

    let Some(endpoint) = COLLECTOR_ENDPOINT else {
        if let Ok(line) = serde_json::to_string(&envelope) {
            println!("📈 {}", line);
        }
        return;
    };

    let client = reqwest::Client::new();
    if let Err(e) = client.post(endpoint).json(&envelope).send().await {
        eprintln!("⚠️  Analytics delivery failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let envelope = Envelope {
            app: APP_TAG,
            recorded_at: 1_700_000_000,
            event: Event::VideoOpened { id: "5".to_string() },
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["app"], "videx");
        assert_eq!(json["event"], "video_opened");
        assert_eq!(json["id"], "5");
        assert!(json["recorded_at"].is_number());
    }

    #[test]
    fn test_page_view_has_no_payload() {
        let json = serde_json::to_value(Event::PageView).unwrap();
        assert_eq!(json["event"], "page_view");
        assert!(json.get("id").is_none());
    }
}
