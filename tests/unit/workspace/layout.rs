use super::*;

fn populated(root: &Path) -> Workspace {
    let ws = Workspace::under(root);
    ws.ensure_dirs().unwrap();
    std::fs::write(ws.board_path(), b"board").unwrap();
    std::fs::write(ws.attachment_path(0, "jpg"), b"img").unwrap();
    std::fs::write(ws.segment_path(3), b"clip").unwrap();
    ws
}

#[test]
fn clear_item_scratch_twice_leaves_area_empty() {
    let dir = tempfile::tempdir().unwrap();
    let ws = populated(dir.path());

    ws.clear_item_scratch().unwrap();
    let files: Vec<_> = std::fs::read_dir(ws.scratch_dir())
        .unwrap()
        .flatten()
        .filter(|e| e.path().is_file())
        .collect();
    assert!(files.is_empty());

    ws.clear_item_scratch().unwrap();
    assert!(
        std::fs::read_dir(ws.scratch_dir())
            .unwrap()
            .flatten()
            .all(|e| e.path().is_dir())
    );
}

#[test]
fn clear_item_scratch_keeps_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    let ws = populated(dir.path());

    ws.clear_item_scratch().unwrap();
    assert!(ws.rendered_dir().is_dir());
    assert!(ws.segment_path(3).is_file());
}

#[test]
fn clear_rendered_segments_empties_output_area() {
    let dir = tempfile::tempdir().unwrap();
    let ws = populated(dir.path());
    std::fs::write(ws.manifest_path(), b"{}").unwrap();

    ws.clear_rendered_segments().unwrap();
    assert_eq!(std::fs::read_dir(ws.rendered_dir()).unwrap().count(), 0);
}

#[test]
fn clear_rendered_segments_removes_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let ws = populated(dir.path());
    let nested = ws.rendered_dir().join("leftover").join("deeper");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("9.mp4"), b"clip").unwrap();

    ws.clear_rendered_segments().unwrap();
    assert_eq!(std::fs::read_dir(ws.rendered_dir()).unwrap().count(), 0);
    ws.clear_rendered_segments().unwrap();
}

#[test]
fn clearing_missing_areas_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::under(&dir.path().join("never-created"));
    ws.clear_item_scratch().unwrap();
    ws.clear_rendered_segments().unwrap();
    ws.clear_prior_final_output().unwrap();
}

#[test]
fn clear_prior_final_output_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::under(dir.path());
    std::fs::write(ws.final_output(), b"old").unwrap();

    ws.clear_prior_final_output().unwrap();
    assert!(!ws.final_output().exists());
    ws.clear_prior_final_output().unwrap();
}

#[test]
fn paths_embed_positions_and_indices() {
    let ws = Workspace::new("s", "s/videos", "out.mp4");
    assert_eq!(ws.attachment_path(2, "mp4"), Path::new("s/2.mp4"));
    assert_eq!(ws.segment_path(17), Path::new("s/videos/17.mp4"));
    assert_eq!(ws.manifest_path(), Path::new("s/videos/manifest.json"));
}
