/// Kind of media attached to a timeline item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still image; downloaded and resized to the canvas.
    Image,
    /// Video clip; the best variant is downloaded and appended after the slides.
    Video,
}

/// One encoded rendition of a video attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoVariant {
    /// Download URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Declared bitrate; feeds omit it for streaming playlists.
    #[serde(default)]
    pub bitrate: Option<u64>,
}

impl VideoVariant {
    /// Build a variant with both fields present.
    pub fn new(url: impl Into<String>, bitrate: u64) -> Self {
        Self {
            url: Some(url.into()),
            bitrate: Some(bitrate),
        }
    }
}

/// Reference to one attachment of a timeline item.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaRef {
    /// Attachment kind.
    pub kind: MediaKind,
    /// Image URL, or the poster URL for videos.
    pub source_url: String,
    /// Available renditions (videos only).
    #[serde(default)]
    pub variants: Vec<VideoVariant>,
}

impl MediaRef {
    /// Image attachment.
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source_url: url.into(),
            variants: Vec::new(),
        }
    }

    /// Video attachment with the given renditions.
    pub fn video(poster_url: impl Into<String>, variants: Vec<VideoVariant>) -> Self {
        Self {
            kind: MediaKind::Video,
            source_url: poster_url.into(),
            variants,
        }
    }
}

/// One post of the feed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineItem {
    /// Author handle, spoken in the preamble and drawn on the board.
    pub author: String,
    /// Full post text.
    pub text: String,
    /// Declared language code of `text`.
    #[serde(default = "default_language")]
    pub language_code: String,
    /// Attachments in feed order; `None` when the feed carried no media metadata.
    #[serde(default)]
    pub attachments: Option<Vec<MediaRef>>,
}

fn default_language() -> String {
    crate::foundation::core::BASE_LANGUAGE.to_string()
}

impl TimelineItem {
    /// Text-only item.
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            language_code: language_code.into(),
            attachments: None,
        }
    }

    /// Attach media in feed order.
    pub fn with_attachments(mut self, attachments: Vec<MediaRef>) -> Self {
        self.attachments = Some(attachments);
        self
    }
}
