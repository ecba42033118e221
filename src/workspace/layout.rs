use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::ReelResult;

const BOARD_FILE: &str = "board.png";
const NARRATION_FILE: &str = "narration.f32le";
const MANIFEST_FILE: &str = "manifest.json";
const SEGMENT_EXT: &str = "mp4";

/// On-disk layout of one run.
///
/// Every stage receives the workspace explicitly instead of reaching for fixed filenames, so a
/// future per-item workspace only needs distinct directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    scratch_dir: PathBuf,
    rendered_dir: PathBuf,
    final_output: PathBuf,
}

impl Workspace {
    /// Workspace over the given scratch area, rendered-segment area, and final output file.
    pub fn new(
        scratch_dir: impl Into<PathBuf>,
        rendered_dir: impl Into<PathBuf>,
        final_output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            rendered_dir: rendered_dir.into(),
            final_output: final_output.into(),
        }
    }

    /// Conventional layout under `root`: `tmp/`, `tmp/videos/`, `tweet_video.mp4`.
    pub fn under(root: &Path) -> Self {
        let scratch = root.join("tmp");
        Self::new(
            scratch.clone(),
            scratch.join("videos"),
            root.join("tweet_video.mp4"),
        )
    }

    /// Flat scratch area for per-item intermediates.
    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Directory holding one numbered clip per rendered item.
    pub fn rendered_dir(&self) -> &Path {
        &self.rendered_dir
    }

    /// Final concatenated video.
    pub fn final_output(&self) -> &Path {
        &self.final_output
    }

    /// Create the scratch and rendered areas if missing.
    pub fn ensure_dirs(&self) -> ReelResult<()> {
        for dir in [&self.scratch_dir, &self.rendered_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create workspace dir '{}'", dir.display()))?;
        }
        Ok(())
    }

    /// Annotated board image (single slot, overwritten per item).
    pub fn board_path(&self) -> PathBuf {
        self.scratch_dir.join(BOARD_FILE)
    }

    /// Assembled narration PCM (single slot, overwritten per item).
    pub fn narration_path(&self) -> PathBuf {
        self.scratch_dir.join(NARRATION_FILE)
    }

    /// Downloaded attachment; the name embeds the attachment's feed position.
    pub fn attachment_path(&self, position: usize, ext: &str) -> PathBuf {
        self.scratch_dir.join(format!("{position}.{ext}"))
    }

    /// Narrated slide sequence before trailing videos are appended.
    pub fn slides_path(&self, index: usize) -> PathBuf {
        self.scratch_dir.join(format!("slides_{index}.{SEGMENT_EXT}"))
    }

    /// Finished per-item clip; the name embeds the item's processing index.
    pub fn segment_path(&self, index: usize) -> PathBuf {
        self.rendered_dir.join(format!("{index}.{SEGMENT_EXT}"))
    }

    /// Ordered segment manifest kept alongside the clips.
    pub fn manifest_path(&self) -> PathBuf {
        self.rendered_dir.join(MANIFEST_FILE)
    }

    /// Remove every non-directory entry directly inside the scratch area.
    ///
    /// Idempotent; a missing scratch area counts as already clear.
    pub fn clear_item_scratch(&self) -> ReelResult<()> {
        clear_entries(&self.scratch_dir, false)
    }

    /// Remove every entry inside the rendered-segment area, subdirectories included.
    pub fn clear_rendered_segments(&self) -> ReelResult<()> {
        clear_entries(&self.rendered_dir, true)
    }

    /// Remove a final output left behind by an earlier run; absence is not an error.
    pub fn clear_prior_final_output(&self) -> ReelResult<()> {
        match std::fs::remove_file(&self.final_output) {
            Ok(()) => {
                tracing::debug!(path = %self.final_output.display(), "removed prior final output");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!(
                    "remove prior output '{}'",
                    self.final_output.display()
                ))
                .into()),
        }
    }
}

/// Remove the entries of `dir`; directories only when `with_dirs` is set.
fn clear_entries(dir: &Path, with_dirs: bool) -> ReelResult<()> {
    let rd = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("list '{}'", dir.display()))
                .into());
        }
    };

    let mut removed = 0usize;
    for entry in rd.flatten() {
        let path = entry.path();
        let removal = if path.is_dir() {
            if !with_dirs {
                continue;
            }
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        // An entry vanishing between listing and removal is fine.
        match removal {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("remove '{}'", path.display()))
                    .into());
            }
        }
    }
    tracing::debug!(dir = %dir.display(), removed, "cleared");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/workspace/layout.rs"]
mod tests;
