//! Community rule tests: admin video entries and live chat.

use clash_hub::community::{
    recent_messages, sort_latest_first, validate_message, Message, SendCooldown, Video, VideoDraft,
};
use clash_hub::core::{ContentError, EditorConfig, Viewer};

fn stored(draft: &VideoDraft, id: &str, ts: u64) -> Video {
    let entry = draft
        .validate(&Viewer::signed_in("admin", "streamer").as_admin(), &EditorConfig::default())
        .unwrap();
    Video {
        id: id.to_string(),
        title: entry.title,
        thumbnail_url: entry.thumbnail_url,
        video_url: entry.video_url,
        creator: entry.creator,
        timestamp_ms: Some(ts),
    }
}

/// Add two videos, edit one, and order the feed.
#[test]
fn test_video_admin_flow() {
    let first = VideoDraft::new("Road to Ultimate Champion", "Clash Hub", "https://www.youtube.com/watch?v=aaaaaaaaaaa");
    let second = VideoDraft::new("Best Evo Decks", "Clash Hub", "https://youtu.be/bbbbbbbbbbb");

    let mut feed = vec![stored(&first, "v1", 100), stored(&second, "v2", 200)];
    sort_latest_first(&mut feed);
    assert_eq!(feed[0].id, "v2");
    assert_eq!(feed[1].thumbnail_url, "https://img.youtube.com/vi/aaaaaaaaaaa/hqdefault.jpg");

    let mut edit = VideoDraft::from_video(&feed[1]);
    edit.video_url = "https://www.youtube.com/embed/ccccccccccc".to_string();
    let updated = edit
        .validate(&Viewer::signed_in("admin", "streamer").as_admin(), &EditorConfig::default())
        .unwrap();
    assert_eq!(updated.title, "Road to Ultimate Champion");
    assert_eq!(updated.thumbnail_url, "https://img.youtube.com/vi/ccccccccccc/hqdefault.jpg");
}

/// Non-admins cannot write videos.
#[test]
fn test_video_requires_admin() {
    let draft = VideoDraft::new("Best Evo Decks", "Clash Hub", "https://youtu.be/bbbbbbbbbbb");
    let config = EditorConfig::default();

    assert_eq!(draft.validate(&Viewer::anonymous(), &config), Err(ContentError::NotSignedIn));
    assert_eq!(
        draft.validate(&Viewer::signed_in("u", "fan"), &config),
        Err(ContentError::NotAdmin)
    );
}

/// Configured chat limits apply.
#[test]
fn test_chat_with_custom_limits() {
    let config = EditorConfig::new().with_chat_limits(10, 1_000);
    let viewer = Viewer::signed_in("u", "fan");
    let mut cooldown = SendCooldown::new();

    assert_eq!(
        validate_message("this is too long", &viewer, 0, &mut cooldown, &config),
        Err(ContentError::TooLong { field: "message", max: 10 })
    );
    assert!(validate_message("gg", &viewer, 0, &mut cooldown, &config).is_ok());
    assert_eq!(
        validate_message("gg again", &viewer, 400, &mut cooldown, &config),
        Err(ContentError::Cooldown { remaining_ms: 600 })
    );
    assert!(validate_message("gg again", &viewer, 1_000, &mut cooldown, &config).is_ok());
}

/// The chat snapshot is read from JSON and windowed.
#[test]
fn test_chat_snapshot_from_json() {
    let messages: Vec<Message> = serde_json::from_str(
        r#"[
            { "id": "b", "text": "second", "username": "x", "uid": "1", "timestampMs": 90000000 },
            { "id": "a", "text": "first", "username": "y", "uid": "2", "timestampMs": 88000000 },
            { "id": "old", "text": "stale", "username": "z", "uid": "3", "timestampMs": 1000 },
            { "id": "pending", "text": "sending", "username": "x", "uid": "1" }
        ]"#,
    )
    .unwrap();

    let recent = recent_messages(&messages, 90_000_001);
    let ids: Vec<_> = recent.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}
