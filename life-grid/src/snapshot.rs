//! Snapshot text format: two whitespace-delimited integer header tokens
//! (width, height) followed by `width * height` non-space cell characters,
//! `'1'` for alive and anything else for dead, row-major by `y` then `x`.
//! Row breaks in the cell section are cosmetic.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Grid;

/// Extension appended by [`Grid::save_to_file`] when the path has none.
pub const SNAPSHOT_EXTENSION: &str = "txt";

/// Failure loading or saving a grid snapshot. Covers the two failure classes
/// of the format: file I/O and malformed content. All are recoverable; the
/// caller picks a fallback initialization.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot header is missing the {0} token")]
    MissingHeader(&'static str),

    #[error("snapshot header has a non-numeric {name} token: {token:?}")]
    InvalidHeader { name: &'static str, token: String },

    #[error("snapshot declares an invalid {name}: {value}")]
    InvalidSize { name: &'static str, value: i64 },

    #[error("snapshot declares {expected} cells but holds only {found}")]
    Truncated { expected: usize, found: usize },
}

impl Grid {
    /// Loads a grid from a snapshot file.
    ///
    /// Returns a fresh grid, so a failed load never disturbs any grid the
    /// caller already holds.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path)?;
        Self::from_snapshot(&text)
    }

    /// Parses a grid from snapshot text.
    pub fn from_snapshot(text: &str) -> Result<Self, SnapshotError> {
        let mut tokens = text.split_whitespace();
        let width = parse_dimension(tokens.next(), "width")?;
        let height = parse_dimension(tokens.next(), "height")?;

        let mut grid = Self::with_size(width, height);
        let expected = grid.num_cells();
        // The remaining tokens, flattened, are the cell characters with all
        // whitespace skipped. Content past the declared count is ignored.
        let mut states = tokens.flat_map(|token| token.chars());
        let mut found = 0;
        for cell in grid.cells_mut() {
            match states.next() {
                Some(c) => cell.set_alive(c == '1'),
                None => return Err(SnapshotError::Truncated { expected, found }),
            }
            found += 1;
        }
        Ok(grid)
    }

    /// Writes the grid to a snapshot file, appending the
    /// [`SNAPSHOT_EXTENSION`] when `path` lacks one. Returns the path
    /// actually written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, SnapshotError> {
        let path = snapshot_path(path.as_ref());
        fs::write(&path, self.to_snapshot())?;
        Ok(path)
    }

    /// Renders the grid as snapshot text, one `0`/`1` row per `y`.
    pub fn to_snapshot(&self) -> String {
        let mut result = format!("{}\n{}\n", self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                result.push(if self.at(x, y).is_alive() { '1' } else { '0' });
            }
            result.push('\n');
        }
        result
    }
}

fn parse_dimension(token: Option<&str>, name: &'static str) -> Result<u32, SnapshotError> {
    let token = token.ok_or(SnapshotError::MissingHeader(name))?;
    let value: i64 = token.parse().map_err(|_| SnapshotError::InvalidHeader {
        name,
        token: token.to_string(),
    })?;
    if value <= 0 {
        return Err(SnapshotError::InvalidSize { name, value });
    }
    u32::try_from(value).map_err(|_| SnapshotError::InvalidSize { name, value })
}

fn snapshot_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(SNAPSHOT_EXTENSION)
    }
}
