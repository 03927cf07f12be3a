// File: src/persistence.rs
use crate::core::corpus::Corpus;
use crate::error::{KpcsError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const SNAPSHOT_VERSION: u32 = 1;

/// The serializable state of a classified corpus.
#[derive(serde::Serialize, serde::Deserialize)]
struct SnapshotState {
    version: u32,
    corpus: Corpus,
}

/// Writes a file through a temporary sibling that is renamed into place, so a
/// failed run never leaves a truncated output behind.
pub fn atomic_write<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| KpcsError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| KpcsError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush().map_err(|e| KpcsError::io(path, e))?;
    }

    temp_file.persist(path).map_err(|e| KpcsError::Persist {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

pub fn save_snapshot(corpus: &Corpus, path: &Path) -> Result<()> {
    let state = SnapshotState {
        version: SNAPSHOT_VERSION,
        corpus: corpus.clone(),
    };
    atomic_write(path, |writer| {
        bincode::serialize_into(writer, &state)?;
        Ok(())
    })
}

pub fn load_snapshot(path: &Path) -> Result<Corpus> {
    let file = File::open(path).map_err(|e| KpcsError::io(path, e))?;
    let reader = BufReader::new(file);
    let state: SnapshotState = bincode::deserialize_from(reader)?;

    if state.version != SNAPSHOT_VERSION {
        return Err(KpcsError::SnapshotVersion {
            found: state.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(state.corpus)
}
