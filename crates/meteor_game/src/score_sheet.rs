//! Ranking table storage and the ranking threshold
//!
//! Rows are `(name, score)` string pairs ordered best first, exactly as they
//! are stored. Scores are parsed only when the threshold is computed.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use arcade_engine::UpdateError;
use thiserror::Error;

/// One ranking entry: player name and score, as stored
pub type ScoreRow = (String, String);

/// Number of entries the ranking shows
pub const RANKING_SIZE: usize = 10;

/// Score sheet errors
#[derive(Error, Debug)]
pub enum ScoreSheetError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stored table could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The table could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A row holds a score that is not a non-negative integer
    #[error("row {row} has invalid score '{value}'")]
    InvalidScore {
        /// Row index
        row: usize,
        /// Stored value
        value: String,
    },
}

impl From<ScoreSheetError> for UpdateError {
    fn from(error: ScoreSheetError) -> Self {
        Self::external(error)
    }
}

/// Persistent ranking table
pub trait ScoreSheet {
    /// All rows, best first
    fn rows(&self) -> Result<Vec<ScoreRow>, ScoreSheetError>;

    /// Replace the stored rows
    fn store(&self, rows: &[ScoreRow]) -> Result<(), ScoreSheetError>;
}

/// Insert `name` with `points` after every row scoring at least as much
pub fn register_score(sheet: &dyn ScoreSheet, name: &str, points: u32) -> Result<usize, ScoreSheetError> {
    let mut rows = sheet.rows()?;
    let mut position = rows.len();
    for (index, (_, value)) in rows.iter().enumerate() {
        if parse_score(index, value)? < points {
            position = index;
            break;
        }
    }
    rows.insert(position, (name.to_string(), points.to_string()));
    sheet.store(&rows)?;
    log::info!("Registered '{name}' with {points} points at rank {}", position + 1);
    Ok(position)
}

fn parse_score(row: usize, value: &str) -> Result<u32, ScoreSheetError> {
    value.trim().parse().map_err(|_| ScoreSheetError::InvalidScore {
        row,
        value: value.to_string(),
    })
}

/// Score a run must beat to enter the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingThreshold {
    /// Score stored in the threshold row
    Score(u32),
    /// The threshold row does not exist
    Unavailable {
        /// Row the threshold is read from, if any
        index: Option<usize>,
        /// Rows in the table
        total: usize,
    },
}

impl RankingThreshold {
    /// Row holding the threshold for a table of `total` rows
    ///
    /// Row 10 for tables of ten rows or more, otherwise the last row. A
    /// table of exactly ten rows has no row 10, and an empty table has no
    /// last row; both yield [`RankingThreshold::Unavailable`]. This means
    /// a completely full ten-row table admits every run, even one with
    /// zero points.
    pub fn index_for(total: usize) -> Option<usize> {
        if total >= RANKING_SIZE {
            Some(RANKING_SIZE)
        } else {
            total.checked_sub(1)
        }
    }

    /// Threshold of a stored table
    pub fn from_rows(rows: &[ScoreRow]) -> Result<Self, ScoreSheetError> {
        let total = rows.len();
        let index = Self::index_for(total);
        match index.and_then(|index| rows.get(index).map(|row| (index, row))) {
            Some((index, (_, value))) => Ok(Self::Score(parse_score(index, value)?)),
            None => Ok(Self::Unavailable { index, total }),
        }
    }

    /// Whether `points` enters the ranking
    ///
    /// The threshold must be strictly beaten. Without a threshold row (an
    /// empty table or one of exactly ten rows) every run qualifies.
    pub fn admits(&self, points: u32) -> bool {
        match *self {
            Self::Score(threshold) => points > threshold,
            Self::Unavailable { .. } => true,
        }
    }
}

/// In-memory score sheet
#[derive(Debug, Default)]
pub struct MemoryScoreSheet {
    rows: RefCell<Vec<ScoreRow>>,
}

impl MemoryScoreSheet {
    /// Create a sheet holding `rows`
    pub fn new(rows: Vec<ScoreRow>) -> Self {
        Self { rows: RefCell::new(rows) }
    }

    /// Create a sheet from `(name, score)` pairs
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self::new(
            scores
                .into_iter()
                .map(|(name, score)| (name.to_string(), score.to_string()))
                .collect(),
        )
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    /// Whether the sheet is empty
    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl ScoreSheet for MemoryScoreSheet {
    fn rows(&self) -> Result<Vec<ScoreRow>, ScoreSheetError> {
        Ok(self.rows.borrow().clone())
    }

    fn store(&self, rows: &[ScoreRow]) -> Result<(), ScoreSheetError> {
        *self.rows.borrow_mut() = rows.to_vec();
        Ok(())
    }
}

/// Score sheet persisted as a RON list of `(name, score)` pairs
///
/// A missing file reads as an empty table.
#[derive(Debug, Clone)]
pub struct RonScoreSheet {
    path: PathBuf,
}

impl RonScoreSheet {
    /// Use the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreSheet for RonScoreSheet {
    fn rows(&self) -> Result<Vec<ScoreRow>, ScoreSheetError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::debug!("No score sheet at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };
        ron::from_str(&contents).map_err(|e| ScoreSheetError::Parse(e.to_string()))
    }

    fn store(&self, rows: &[ScoreRow]) -> Result<(), ScoreSheetError> {
        let contents = ron::ser::to_string_pretty(&rows, ron::ser::PrettyConfig::default())
            .map_err(|e| ScoreSheetError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
