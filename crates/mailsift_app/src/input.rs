use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use mailsift_core::parse_candidate_lines;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read candidate urls from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// Reads candidates from `path`, or from stdin when `path` is `-`.
pub fn read_candidates(path: &Path) -> Result<Vec<String>, InputError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map(|_| buffer)
    } else {
        fs::read_to_string(path)
    }
    .map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_candidate_lines(&raw))
}

/// Positional URLs first, then file contents.
pub fn collect_candidates(
    positional: &[String],
    input: Option<&Path>,
) -> Result<Vec<String>, InputError> {
    let mut candidates = positional.to_vec();
    if let Some(path) = input {
        candidates.extend(read_candidates(path)?);
    }
    Ok(candidates)
}
