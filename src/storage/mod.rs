pub mod sqlite;

pub use sqlite::SqliteStorage;

use crate::model::{AwardRecord, Movie, NewMovie, StorageError};
use crate::normalizer::to_award_records;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Record access used by the HTTP handlers and the startup loader.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn insert(&self, movie: NewMovie) -> Result<Movie, StorageError>;
    async fn get(&self, id: i64) -> Result<Option<Movie>, StorageError>;
    async fn list_all(&self) -> Result<Vec<Movie>, StorageError>;
    async fn update(&self, id: i64, movie: NewMovie) -> Result<Option<Movie>, StorageError>;
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;
    /// All-or-nothing bulk insert.
    async fn insert_many(&self, movies: Vec<NewMovie>) -> Result<usize, StorageError>;
    /// Point-in-time snapshot of every record, projected for the analyzer.
    async fn award_records(&self) -> Result<Vec<AwardRecord>, StorageError>;
}

// Every call holds the lock for its whole duration, so readers never observe
// a partially applied write.
#[async_trait]
impl MovieStore for Mutex<SqliteStorage> {
    async fn insert(&self, movie: NewMovie) -> Result<Movie, StorageError> {
        self.lock().await.insert_movie(&movie)
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>, StorageError> {
        self.lock().await.get_movie(id)
    }

    async fn list_all(&self) -> Result<Vec<Movie>, StorageError> {
        self.lock().await.get_all_movies()
    }

    async fn update(&self, id: i64, movie: NewMovie) -> Result<Option<Movie>, StorageError> {
        self.lock().await.update_movie(id, &movie)
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        self.lock().await.delete_movie(id)
    }

    async fn insert_many(&self, movies: Vec<NewMovie>) -> Result<usize, StorageError> {
        self.lock().await.insert_movies(&movies)
    }

    async fn award_records(&self) -> Result<Vec<AwardRecord>, StorageError> {
        let movies = self.lock().await.get_all_movies()?;
        Ok(to_award_records(&movies))
    }
}
