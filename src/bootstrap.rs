// One-time dataset load performed before the service starts answering requests.
use crate::model::{ParserError, StorageError};
use crate::normalizer::normalize_all;
use crate::parser::MovieListParser;
use crate::storage::MovieStore;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Parses the dataset at `path` and inserts it into `store` as one batch.
///
/// A malformed record aborts the load before anything is written.
pub async fn load_dataset(
    store: &dyn MovieStore,
    path: &Path,
    delimiter: u8,
) -> Result<usize, BootstrapError> {
    let parser = MovieListParser::new(delimiter);
    let mut movies = parser.parse_file(path)?;
    normalize_all(&mut movies);

    let inserted = store.insert_many(movies).await?;
    info!("Loaded {} movies from {}", inserted, path.display());
    Ok(inserted)
}
