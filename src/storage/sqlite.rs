use crate::model::{Movie, NewMovie, StorageError};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const MOVIE_COLUMNS: &str = "id, year, title, studios, producer, winner";

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database at `db_path` and creates the schema if needed.
    /// `":memory:"` gives a private in-memory database.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS movie (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                year INTEGER NOT NULL,
                title TEXT NOT NULL,
                studios TEXT NOT NULL,
                producer TEXT NOT NULL,
                winner TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_movie_producer ON movie (producer);
            ",
        )?;

        Ok(Self { conn })
    }

    pub fn insert_movie(&self, movie: &NewMovie) -> Result<Movie, StorageError> {
        self.conn.execute(
            "INSERT INTO movie (year, title, studios, producer, winner) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &movie.year,
                &movie.title,
                &movie.studios,
                &movie.producer,
                &movie.winner,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Movie::from_new(id, movie.clone()))
    }

    /// Inserts every movie in one transaction; nothing is written if any insert fails.
    pub fn insert_movies(&mut self, movies: &[NewMovie]) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO movie (year, title, studios, producer, winner) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for movie in movies {
                stmt.execute(params![
                    &movie.year,
                    &movie.title,
                    &movie.studios,
                    &movie.producer,
                    &movie.winner,
                ])?;
            }
        }
        tx.commit()?;
        Ok(movies.len())
    }

    pub fn get_movie(&self, id: i64) -> Result<Option<Movie>, StorageError> {
        let movie = self
            .conn
            .query_row(
                &format!("SELECT {} FROM movie WHERE id = ?1", MOVIE_COLUMNS),
                params![id],
                Self::map_movie,
            )
            .optional()?;
        Ok(movie)
    }

    pub fn get_all_movies(&self) -> Result<Vec<Movie>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM movie ORDER BY id ASC", MOVIE_COLUMNS))?;

        let rows = stmt.query_map([], Self::map_movie)?;
        let mut movies = Vec::new();
        for movie in rows {
            movies.push(movie?);
        }

        Ok(movies)
    }

    /// Replaces every field of the movie; `None` if the id does not exist.
    pub fn update_movie(&self, id: i64, movie: &NewMovie) -> Result<Option<Movie>, StorageError> {
        let changed = self.conn.execute(
            "UPDATE movie SET year = ?1, title = ?2, studios = ?3, producer = ?4, winner = ?5
             WHERE id = ?6",
            params![
                &movie.year,
                &movie.title,
                &movie.studios,
                &movie.producer,
                &movie.winner,
                id,
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(Movie::from_new(id, movie.clone())))
    }

    /// Returns false if no movie had this id.
    pub fn delete_movie(&self, id: i64) -> Result<bool, StorageError> {
        let deleted = self
            .conn
            .execute("DELETE FROM movie WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    fn map_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        Ok(Movie {
            id: row.get(0)?,
            year: row.get(1)?,
            title: row.get(2)?,
            studios: row.get(3)?,
            producer: row.get(4)?,
            winner: row.get(5)?,
        })
    }
}
