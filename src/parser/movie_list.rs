// Award dataset (movie list CSV) parsing
use crate::model::{NewMovie, ParserError};
use crate::utils::parse_year;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

pub trait Parser {
    fn parse(&self, input: &str) -> Result<Vec<NewMovie>, ParserError>;
}

/// Parser for `year;title;studios;producers;winner` datasets.
///
/// Any malformed record rejects the whole batch.
pub struct MovieListParser {
    delimiter: u8,
}

struct Columns {
    year: usize,
    title: usize,
    studios: usize,
    producer: usize,
    winner: Option<usize>,
}

impl MovieListParser {
    pub const DEFAULT_DELIMITER: u8 = b';';

    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Vec<NewMovie>, ParserError> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    fn locate_columns(headers: &StringRecord) -> Result<Columns, ParserError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| ParserError::MissingHeader(names[0].to_string()))
        };

        Ok(Columns {
            year: require(&["year"])?,
            title: require(&["title"])?,
            studios: require(&["studios"])?,
            producer: require(&["producers", "producer"])?,
            winner: find(&["winner"]),
        })
    }

    fn read_record(
        record: &StringRecord,
        columns: &Columns,
        line: u64,
    ) -> Result<NewMovie, ParserError> {
        let field = |index: usize, name: &str| {
            record
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| ParserError::InvalidRecord {
                    line,
                    reason: format!("missing '{}' field", name),
                })
        };

        let year_text = field(columns.year, "year")?;
        let year = parse_year(&year_text).ok_or_else(|| ParserError::InvalidRecord {
            line,
            reason: format!("non-numeric year '{}'", year_text),
        })?;

        Ok(NewMovie {
            year,
            title: field(columns.title, "title")?,
            studios: field(columns.studios, "studios")?,
            producer: field(columns.producer, "producers")?,
            // Non-winners often leave the trailing cell off entirely.
            winner: columns
                .winner
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string(),
        })
    }
}

impl Default for MovieListParser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELIMITER)
    }
}

impl Parser for MovieListParser {
    fn parse(&self, input: &str) -> Result<Vec<NewMovie>, ParserError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes());

        let headers = reader.headers()?.clone();
        let columns = Self::locate_columns(&headers)?;

        let mut movies = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            movies.push(Self::read_record(&record, &columns, line)?);
        }

        Ok(movies)
    }
}
