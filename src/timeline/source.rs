use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::model::TimelineItem;

/// Collaborator that supplies timeline items, most recent first.
pub trait TimelineSource {
    /// Items in the source's native order (most recent first).
    fn fetch_items(&self) -> ReelResult<Vec<TimelineItem>>;
}

/// Timeline read from a JSON array on disk.
#[derive(Clone, Debug)]
pub struct JsonTimelineSource {
    path: PathBuf,
}

impl JsonTimelineSource {
    /// Source backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimelineSource for JsonTimelineSource {
    fn fetch_items(&self) -> ReelResult<Vec<TimelineItem>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read timeline '{}'", self.path.display()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ReelError::serde(format!(
                "timeline '{}' is not a JSON array of items: {e}",
                self.path.display()
            ))
        })
    }
}

/// Reverse native most-recent-first order into processing order (oldest first).
pub fn chronological(mut items: Vec<TimelineItem>) -> Vec<TimelineItem> {
    items.reverse();
    items
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/source.rs"]
mod tests;
