use std::path::PathBuf;

use crate::assets::image::resize_in_place;
use crate::fetch::download::Downloader;
use crate::foundation::core::Canvas;
use crate::foundation::error::ReelResult;
use crate::timeline::model::{MediaKind, MediaRef, TimelineItem, VideoVariant};
use crate::workspace::layout::Workspace;

/// One downloaded attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedMedia {
    /// Attachment kind.
    pub kind: MediaKind,
    /// Scratch path of the downloaded file.
    pub local_path: PathBuf,
    /// Position of the attachment in the item's feed order.
    pub sequence_index: usize,
}

/// Downloads of one item, split by kind, each in feed order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchedAttachments {
    /// Canvas-sized still images.
    pub images: Vec<FetchedMedia>,
    /// Video clips as downloaded.
    pub videos: Vec<FetchedMedia>,
}

impl FetchedAttachments {
    /// Image paths in feed order.
    pub fn image_paths(&self) -> Vec<PathBuf> {
        self.images.iter().map(|m| m.local_path.clone()).collect()
    }

    /// Video paths in feed order.
    pub fn video_paths(&self) -> Vec<PathBuf> {
        self.videos.iter().map(|m| m.local_path.clone()).collect()
    }
}

/// Pick the rendition with the highest declared bitrate.
///
/// Ties keep the first seen; a variant needs a URL and a bitrate above zero to be usable.
pub fn select_best_variant(variants: &[VideoVariant]) -> Option<&VideoVariant> {
    let mut best: Option<(&VideoVariant, u64)> = None;
    for v in variants {
        let (Some(_), Some(rate)) = (v.url.as_deref(), v.bitrate) else {
            continue;
        };
        if rate == 0 {
            continue;
        }
        if best.is_none_or(|(_, top)| rate > top) {
            best = Some((v, rate));
        }
    }
    best.map(|(v, _)| v)
}

/// Extension used for downloaded images whose URL path carries none.
const FALLBACK_IMAGE_EXT: &str = "jpg";
/// Extension used for downloaded videos whose URL path carries none.
const FALLBACK_VIDEO_EXT: &str = "mp4";

/// File extension of the last path segment of a media URL.
///
/// Query string and fragment never count. `None` when the URL does not parse or its last segment
/// has no short alphanumeric suffix; decoders sniff content, so any fallback name works.
pub fn url_extension(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;
    let (_, ext) = segment.rsplit_once('.')?;
    let usable =
        !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    usable.then(|| ext.to_string())
}

/// Downloads an item's attachments into the workspace.
pub struct MediaFetcher<D> {
    downloader: D,
    canvas: Canvas,
}

impl<D: Downloader> MediaFetcher<D> {
    /// Fetcher that resizes images to `canvas`.
    pub fn new(downloader: D, canvas: Canvas) -> Self {
        Self { downloader, canvas }
    }

    /// Download every attachment of `item`.
    ///
    /// Items without attachment metadata yield empty lists. Videos without a usable variant are
    /// skipped.
    #[tracing::instrument(level = "debug", skip_all, fields(author = %item.author))]
    pub fn fetch(&self, item: &TimelineItem, ws: &Workspace) -> ReelResult<FetchedAttachments> {
        let mut out = FetchedAttachments::default();
        let Some(attachments) = item.attachments.as_deref() else {
            return Ok(out);
        };

        for (position, media) in attachments.iter().enumerate() {
            match media.kind {
                MediaKind::Video => {
                    if let Some(fetched) = self.fetch_video(position, media, ws)? {
                        out.videos.push(fetched);
                    }
                }
                MediaKind::Image => out.images.push(self.fetch_image(position, media, ws)?),
            }
        }
        tracing::info!(
            images = out.images.len(),
            videos = out.videos.len(),
            "fetched attachments"
        );
        Ok(out)
    }

    fn fetch_video(
        &self,
        position: usize,
        media: &MediaRef,
        ws: &Workspace,
    ) -> ReelResult<Option<FetchedMedia>> {
        let Some(url) = select_best_variant(&media.variants).and_then(|v| v.url.as_deref()) else {
            tracing::warn!(position, "video attachment has no usable variant; skipping");
            return Ok(None);
        };
        let ext = url_extension(url).unwrap_or_else(|| FALLBACK_VIDEO_EXT.to_string());
        let path = ws.attachment_path(position, &ext);
        self.downloader.download(url, &path)?;
        Ok(Some(FetchedMedia {
            kind: MediaKind::Video,
            local_path: path,
            sequence_index: position,
        }))
    }

    fn fetch_image(
        &self,
        position: usize,
        media: &MediaRef,
        ws: &Workspace,
    ) -> ReelResult<FetchedMedia> {
        let ext = url_extension(&media.source_url)
            .unwrap_or_else(|| FALLBACK_IMAGE_EXT.to_string());
        let path = ws.attachment_path(position, &ext);
        self.downloader.download(&media.source_url, &path)?;
        resize_in_place(&path, self.canvas)?;
        Ok(FetchedMedia {
            kind: MediaKind::Image,
            local_path: path,
            sequence_index: position,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/media.rs"]
mod tests;
