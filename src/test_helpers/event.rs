use serde_json::json;

/// Builds a raw notification event payload with the producer's surrounding
/// fields, as it would arrive on stdin.
pub fn notification_event_json(message: &str) -> String {
    json!({
        "session_id": "test-session",
        "transcript_path": "/tmp/transcript.jsonl",
        "hook_event_name": "Notification",
        "message": message,
    })
    .to_string()
}
