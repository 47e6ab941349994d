//! Video showcase entries.
//!
//! Storage and the live video feed belong to the document store. This file
//! holds the rules applied before an admin's edit is written (field
//! lengths, YouTube URL parsing, thumbnail derivation) and the admin gate
//! on deletes.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::config::EditorConfig;
use crate::core::error::ContentError;
use crate::core::viewer::Viewer;

/// A stored video entry, as delivered by the live feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub creator: String,
    /// Server timestamp in milliseconds. `None` while a write is pending.
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
}

/// Admin form input for adding or editing a video.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDraft {
    pub title: String,
    pub creator: String,
    pub video_url: String,
}

/// A validated draft, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub title: String,
    pub creator: String,
    pub video_url: String,
    pub thumbnail_url: String,
}

fn youtube_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("youtube url pattern is valid")
    })
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Accepts `youtu.be/<id>`, `/v/<id>`, `/u/x/<id>`, `/embed/<id>`,
/// `watch?v=<id>` and `&v=<id>` shapes. The last marker in the URL wins.
#[must_use]
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let captures = youtube_pattern().captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.chars().count() == 11).then_some(id)
}

/// Thumbnail URL for a YouTube video URL.
#[must_use]
pub fn youtube_thumbnail(url: &str) -> Option<String> {
    youtube_video_id(url).map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
}

fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some())
}

impl VideoDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, creator: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            video_url: video_url.into(),
        }
    }

    /// Pre-fill a draft from an existing entry (edit mode).
    #[must_use]
    pub fn from_video(video: &Video) -> Self {
        Self::new(&video.title, &video.creator, &video.video_url)
    }

    /// Check the draft. Only admins may write videos.
    pub fn validate(&self, viewer: &Viewer, config: &EditorConfig) -> Result<VideoEntry, ContentError> {
        authorize_admin(viewer)?;
        if self.title.chars().count() < config.video_title_min_chars {
            return Err(ContentError::TooShort {
                field: "title",
                min: config.video_title_min_chars,
            });
        }
        if self.creator.chars().count() < config.video_creator_min_chars {
            return Err(ContentError::TooShort {
                field: "creator",
                min: config.video_creator_min_chars,
            });
        }
        if !is_http_url(&self.video_url) {
            return Err(ContentError::InvalidUrl(self.video_url.clone()));
        }
        let thumbnail_url =
            youtube_thumbnail(&self.video_url).ok_or_else(|| ContentError::InvalidUrl(self.video_url.clone()))?;

        Ok(VideoEntry {
            title: self.title.clone(),
            creator: self.creator.clone(),
            video_url: self.video_url.clone(),
            thumbnail_url,
        })
    }
}

/// Check that the viewer may delete a video entry. Deleting is admin-only,
/// same as writing.
pub fn authorize_delete(viewer: &Viewer) -> Result<(), ContentError> {
    authorize_admin(viewer)
}

fn authorize_admin(viewer: &Viewer) -> Result<(), ContentError> {
    if !viewer.is_signed_in() {
        return Err(ContentError::NotSignedIn);
    }
    if !viewer.is_admin() {
        return Err(ContentError::NotAdmin);
    }
    Ok(())
}

/// Order a feed snapshot newest first. Pending writes count as newest.
pub fn sort_latest_first(videos: &mut [Video]) {
    videos.sort_by(|a, b| match (a.timestamp_ms, b.timestamp_ms) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (Some(x), Some(y)) => y.cmp(&x),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Viewer {
        Viewer::signed_in("u1", "streamer").as_admin()
    }

    #[test]
    fn test_video_id_shapes() {
        let id = "dQw4w9WgXcQ";
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
        ] {
            assert_eq!(youtube_video_id(url), Some(id), "{}", url);
        }
    }

    #[test]
    fn test_video_id_wrong_length() {
        assert_eq!(youtube_video_id("https://youtu.be/short"), None);
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQextra"), None);
        assert_eq!(youtube_video_id("https://example.com/clip"), None);
    }

    #[test]
    fn test_thumbnail() {
        assert_eq!(
            youtube_thumbnail("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn test_validate_ok() {
        let draft = VideoDraft::new("Top 5 Hog Plays", "Royale King", "https://youtu.be/dQw4w9WgXcQ");
        let entry = draft.validate(&admin(), &EditorConfig::default()).unwrap();
        assert_eq!(entry.thumbnail_url, "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg");
        assert_eq!(entry.title, "Top 5 Hog Plays");
    }

    #[test]
    fn test_validate_permissions() {
        let draft = VideoDraft::new("Top 5 Hog Plays", "Royale King", "https://youtu.be/dQw4w9WgXcQ");
        let config = EditorConfig::default();
        assert_eq!(draft.validate(&Viewer::anonymous(), &config), Err(ContentError::NotSignedIn));
        assert_eq!(
            draft.validate(&Viewer::signed_in("u2", "fan"), &config),
            Err(ContentError::NotAdmin)
        );
    }

    #[test]
    fn test_validate_fields() {
        let config = EditorConfig::default();
        assert_eq!(
            VideoDraft::new("Hog", "Royale King", "https://youtu.be/dQw4w9WgXcQ").validate(&admin(), &config),
            Err(ContentError::TooShort { field: "title", min: 5 })
        );
        assert_eq!(
            VideoDraft::new("Hog plays", "RK", "https://youtu.be/dQw4w9WgXcQ").validate(&admin(), &config),
            Err(ContentError::TooShort { field: "creator", min: 3 })
        );
        assert!(matches!(
            VideoDraft::new("Hog plays", "Royale King", "youtu.be/dQw4w9WgXcQ").validate(&admin(), &config),
            Err(ContentError::InvalidUrl(_))
        ));
        assert!(matches!(
            VideoDraft::new("Hog plays", "Royale King", "https://vimeo.com/123").validate(&admin(), &config),
            Err(ContentError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_delete_requires_admin() {
        assert_eq!(authorize_delete(&Viewer::anonymous()), Err(ContentError::NotSignedIn));
        assert_eq!(
            authorize_delete(&Viewer::signed_in("u2", "fan")),
            Err(ContentError::NotAdmin)
        );
        assert_eq!(authorize_delete(&admin()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unparseable_urls() {
        let config = EditorConfig::default();
        for url in [
            "https://[/v/dQw4w9WgXcQ",
            "https://%%/embed/dQw4w9WgXcQ",
            "ftp://youtu.be/dQw4w9WgXcQ",
        ] {
            assert!(
                matches!(
                    VideoDraft::new("Hog plays", "Royale King", url).validate(&admin(), &config),
                    Err(ContentError::InvalidUrl(_))
                ),
                "{}",
                url
            );
        }
    }

    #[test]
    fn test_from_video_round_trips_fields() {
        let video = Video {
            id: "v1".to_string(),
            title: "Deck Tier List".to_string(),
            thumbnail_url: String::new(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            creator: "Royale King".to_string(),
            timestamp_ms: Some(1),
        };
        let draft = VideoDraft::from_video(&video);
        assert_eq!(draft.title, video.title);
        assert_eq!(draft.video_url, video.video_url);
    }

    #[test]
    fn test_sort_latest_first() {
        let video = |id: &str, ts: Option<u64>| Video {
            id: id.to_string(),
            title: String::new(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            creator: String::new(),
            timestamp_ms: ts,
        };
        let mut videos = vec![video("old", Some(1)), video("pending", None), video("new", Some(5))];

        sort_latest_first(&mut videos);

        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["pending", "new", "old"]);
    }
}
