use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::data::{Catalog, RatingLog};
use crate::error::{AppError, AppResult};
use crate::models::{Movie, Rating};

/// Raw catalog row as stored in movies.csv
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "movieId")]
    movie_id: u32,
    title: String,
    genres: String,
}

/// Raw log row as stored in ratings.csv; extra columns (timestamp) are ignored
#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "userId")]
    user_id: u32,
    #[serde(rename = "movieId")]
    movie_id: u32,
    rating: f64,
}

/// Loads the movie catalog from a CSV file (movieId,title,genres)
///
/// A row missing a required column fails with [`AppError::InvalidInput`].
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut movies = Vec::new();
    for row in reader.deserialize::<MovieRow>() {
        let row = row.map_err(|e| {
            AppError::InvalidInput(format!("malformed catalog row in {}: {}", path.display(), e))
        })?;
        movies.push(Movie::new(row.movie_id, row.title, row.genres));
    }

    info!(movies = movies.len(), path = %path.display(), "catalog loaded");
    Ok(Catalog::new(movies))
}

/// Loads the rating log from a CSV file (userId,movieId,rating)
pub fn load_ratings(path: impl AsRef<Path>) -> AppResult<RatingLog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut ratings = Vec::new();
    for row in reader.deserialize::<RatingRow>() {
        let row = row.map_err(|e| {
            AppError::InvalidInput(format!("malformed rating row in {}: {}", path.display(), e))
        })?;
        ratings.push(Rating::new(row.user_id, row.movie_id, row.rating));
    }

    info!(ratings = ratings.len(), path = %path.display(), "rating log loaded");
    Ok(RatingLog::new(ratings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = write_temp(
            "movieId,title,genres\n\
             1,Toy Story (1995),Adventure|Animation|Children\n\
             2,Jumanji (1995),Adventure|Children|Fantasy\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Toy Story (1995)");
    }

    #[test]
    fn test_load_catalog_quoted_title() {
        let file = write_temp(
            "movieId,title,genres\n\
             11,\"American President, The (1995)\",Comedy|Drama|Romance\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.get(11).unwrap().title, "American President, The (1995)");
    }

    #[test]
    fn test_load_catalog_missing_column() {
        let file = write_temp("movieId,title\n1,Toy Story (1995)\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_load_ratings_ignores_timestamp() {
        let file = write_temp(
            "userId,movieId,rating,timestamp\n\
             1,1,4.0,964982703\n\
             1,3,4.5,964981247\n",
        );
        let log = load_ratings(file.path()).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.ratings()[1].value, 4.5);
    }

    #[test]
    fn test_load_ratings_malformed_value() {
        let file = write_temp("userId,movieId,rating\n1,1,not-a-number\n");
        let err = load_ratings(file.path()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog("/nonexistent/movies.csv").unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }
}
