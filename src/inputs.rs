//! Input enumeration for the command-line tool.
//!
//! Directories are only accepted in recursive mode, where they are walked
//! with [`walkdir`].  Symlinks are never followed during the walk, so cyclic
//! links cannot loop; a symlink named directly on the command line is passed
//! through like any other file.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand `inputs` into a flat list of files to scan.
///
/// Directory walks are sorted by file name so the output order, and
/// therefore the report order, is stable across runs.
pub fn collect_inputs<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            files.push(input.to_path_buf());
            continue;
        }
        if !recursive {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: is a directory (use -r)", input.display()),
            ));
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let msg = e.to_string();
                e.into_io_error()
                    .map(|io| io::Error::new(io.kind(), msg.clone()))
                    .unwrap_or_else(|| io::Error::other(msg))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}
