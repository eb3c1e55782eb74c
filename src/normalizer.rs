use crate::model::{AwardRecord, Movie, NewMovie};
use crate::utils::is_affirmative;

pub fn normalize_all(movies: &mut [NewMovie]) {
    for movie in movies.iter_mut() {
        normalize_movie(movie);
    }
}

fn normalize_movie(movie: &mut NewMovie) {
    trim_in_place(&mut movie.title);
    trim_in_place(&mut movie.studios);
    trim_in_place(&mut movie.producer);
    trim_in_place(&mut movie.winner);
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Projects stored movies into the records the interval analyzer consumes.
pub fn to_award_records(movies: &[Movie]) -> Vec<AwardRecord> {
    movies
        .iter()
        .map(|movie| AwardRecord {
            year: movie.year,
            producer: movie.producer.clone(),
            won: is_affirmative(&movie.winner),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, year: i32, producer: &str, winner: &str) -> Movie {
        Movie {
            id,
            year,
            title: format!("Title {}", id),
            studios: "MGM".into(),
            producer: producer.into(),
            winner: winner.into(),
        }
    }

    #[test]
    fn normalize_trims_every_text_field() {
        let mut movies = vec![NewMovie {
            year: 1980,
            title: "  Can't Stop the Music ".into(),
            studios: "Associated Film Distribution ".into(),
            producer: " Allan Carr".into(),
            winner: " yes ".into(),
        }];
        normalize_all(&mut movies);

        assert_eq!(movies[0].title, "Can't Stop the Music");
        assert_eq!(movies[0].studios, "Associated Film Distribution");
        assert_eq!(movies[0].producer, "Allan Carr");
        assert_eq!(movies[0].winner, "yes");
    }

    #[test]
    fn award_records_flag_winners_case_insensitively() {
        let movies = vec![
            movie(1, 2001, "John F.", "Yes"),
            movie(2, 2002, "John F.", "yes"),
            movie(3, 2000, "John H.", ""),
        ];
        let records = to_award_records(&movies);

        assert_eq!(records.len(), 3);
        assert!(records[0].won);
        assert!(records[1].won);
        assert!(!records[2].won);
        assert_eq!(records[2].producer, "John H.");
        assert_eq!(records[2].year, 2000);
    }
}
