// File: src/persistence.rs
use crate::error::Result;
use crate::learning::SelectionHistoryTree;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// `.json` files stay readable for the host; everything else is bincode.
fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Write the history tree next to `path` first, then rename it into place so
/// a crash never leaves a half-written file behind.
pub fn save_history(tree: &SelectionHistoryTree, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if is_json(path) {
            serde_json::to_writer_pretty(&mut writer, tree)?;
        } else {
            bincode::serialize_into(&mut writer, tree)?;
        }
        writer.flush()?;
    }
    temp_file.persist(path)?;

    info!(path = %path.display(), hits = tree.len(), "saved selection history");
    Ok(())
}

pub fn load_history(path: &Path) -> Result<SelectionHistoryTree> {
    let reader = BufReader::new(File::open(path)?);
    let tree: SelectionHistoryTree = if is_json(path) {
        serde_json::from_reader(reader)?
    } else {
        bincode::deserialize_from(reader)?
    };
    debug!(path = %path.display(), hits = tree.len(), "loaded selection history");
    Ok(tree)
}
