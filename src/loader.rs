//! Host list loading.
//!
//! Reads one target per line. Lines are kept exactly as written: no trimming,
//! no comment handling, and blank lines become empty targets. Only the line
//! terminator (`\n` or `\r\n`) is removed.

use crate::error::LoadError;
use crate::types::Target;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Default host list file, relative to the working directory.
pub const DEFAULT_HOSTS_FILE: &str = "subdomains.txt";

/// Load targets from a host list file.
///
/// Any failure to open or read the file aborts the whole load.
pub fn load_targets(path: impl AsRef<Path>) -> Result<Vec<Target>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let targets = read_targets(file, path)?;
    debug!(path = %path.display(), count = targets.len(), "loaded host list");
    Ok(targets)
}

/// Read targets from any reader. `path` is only used for error reporting.
pub fn read_targets<R: Read>(reader: R, path: &Path) -> Result<Vec<Target>, LoadError> {
    BufReader::new(reader)
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.map(Target::from).map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}
