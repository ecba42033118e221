use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::media::probe_media;
use crate::foundation::error::{ReelError, ReelResult};

/// A finished per-item clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedSegment {
    /// Item position in processing order.
    pub index: usize,
    /// Clip file.
    pub path: PathBuf,
    /// Clip length in seconds.
    pub duration_seconds: f64,
}

/// Rendered segments keyed by item index.
///
/// Holds at most one segment per index; gaps are items that produced nothing.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentManifest {
    segments: BTreeMap<usize, RenderedSegment>,
}

impl SegmentManifest {
    /// Empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `segment`, returning any segment it replaced at the same index.
    pub fn record(&mut self, segment: RenderedSegment) -> Option<RenderedSegment> {
        self.segments.insert(segment.index, segment)
    }

    /// Segments in ascending index order.
    pub fn ordered(&self) -> impl Iterator<Item = &RenderedSegment> {
        self.segments.values()
    }

    /// Indices present, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.segments.keys().copied().collect()
    }

    /// Number of recorded segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all segment durations.
    pub fn total_duration(&self) -> f64 {
        self.segments.values().map(|s| s.duration_seconds).sum()
    }

    /// Persist as pretty JSON.
    pub fn save(&self, path: &Path) -> ReelResult<()> {
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| ReelError::serde(format!("encode segment manifest: {e}")))?;
        std::fs::write(path, json)
            .with_context(|| format!("write segment manifest '{}'", path.display()))?;
        Ok(())
    }

    /// Load a manifest written by [`SegmentManifest::save`].
    pub fn load(path: &Path) -> ReelResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read segment manifest '{}'", path.display()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ReelError::serde(format!("decode segment manifest '{}': {e}", path.display()))
        })
    }

    /// Rebuild a manifest from the clip files in `dir`, probing each for its duration.
    pub fn scan_dir(dir: &Path) -> ReelResult<Self> {
        let mut manifest = Self::new();
        for (index, path) in segment_files(dir)? {
            let duration_seconds = probe_media(&path)?.duration_sec;
            manifest.record(RenderedSegment {
                index,
                path,
                duration_seconds,
            });
        }
        Ok(manifest)
    }
}

/// `<index>.mp4` files in `dir`, sorted by the parsed index.
///
/// Names whose stem is not an integer are ignored.
pub fn segment_files(dir: &Path) -> ReelResult<Vec<(usize, PathBuf)>> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("list rendered segments in '{}'", dir.display()))?;

    let mut files: Vec<(usize, PathBuf)> = rd
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("mp4"))
        .filter_map(|p| {
            let index = p.file_stem()?.to_str()?.parse::<usize>().ok()?;
            Some((index, p))
        })
        .collect();
    files.sort_by_key(|(index, _)| *index);
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/unit/render/manifest.rs"]
mod tests;
