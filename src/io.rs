//! Loading a [`ClassInfo`] from its JSON projection — the role an
//! in-process parser's arena handoff would play for a real C++ header
//! parser, here played by a file on disk.

use std::path::{Path, PathBuf};

use crate::error::SynthError;
use crate::ir::ClassInfo;

/// Load one class from a single JSON file.
pub fn load_class(path: &Path) -> Result<ClassInfo, SynthError> {
    let text = std::fs::read_to_string(path).map_err(|source| SynthError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SynthError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Discover and load every `*.json` class file under `dir`, for batch mode.
pub fn load_batch(dir: &Path) -> Result<Vec<(PathBuf, ClassInfo)>, SynthError> {
    let mut classes = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
    {
        let path = entry.path().to_path_buf();
        let class = load_class(&path)?;
        classes.push((path, class));
    }

    if classes.is_empty() {
        return Err(SynthError::EmptyBatch(dir.to_path_buf()));
    }

    Ok(classes)
}
