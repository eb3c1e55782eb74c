// Core structs: Movie, AwardRecord, ProducerInterval, ProducerIntervalReport
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::utils::parse_year;

/// A movie row as stored, including the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producer: String,
    pub winner: String,
}

/// Payload for create/update and the output of the dataset parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(deserialize_with = "year_from_number_or_string")]
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producer: String,
    #[serde(default)]
    pub winner: String,
}

impl Movie {
    pub fn from_new(id: i64, movie: NewMovie) -> Self {
        Self {
            id,
            year: movie.year,
            title: movie.title,
            studios: movie.studios,
            producer: movie.producer,
            winner: movie.winner,
        }
    }
}

/// One movie's year/producer/win-status entry, as seen by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub year: i32,
    pub producer: String,
    pub won: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// Widened so the gap between any two `i32` years is representable.
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

impl ProducerInterval {
    pub const SENTINEL_PRODUCER: &'static str = "N/A";

    pub fn between(producer: &str, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer: producer.to_string(),
            interval: i64::from(following_win) - i64::from(previous_win),
            previous_win,
            following_win,
        }
    }

    /// Placeholder used when no producer has two or more wins.
    pub fn sentinel() -> Self {
        Self {
            producer: Self::SENTINEL_PRODUCER.to_string(),
            interval: 0,
            previous_win: 0,
            following_win: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerIntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl ProducerIntervalReport {
    pub fn sentinel() -> Self {
        Self {
            min: vec![ProducerInterval::sentinel()],
            max: vec![ProducerInterval::sentinel()],
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}' in header")]
    MissingHeader(String),
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("refusing to analyze {count} records (limit is {limit})")]
    TooManyRecords { count: usize, limit: usize },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearInput {
    Number(i32),
    Text(String),
}

/// Accepts `1999` as well as `"1999"`.
fn year_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match YearInput::deserialize(deserializer)? {
        YearInput::Number(year) => Ok(year),
        YearInput::Text(text) => parse_year(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid year: '{}'", text))),
    }
}
