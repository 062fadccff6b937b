use serde::{Deserialize, Serialize};

/// A movie in the catalog
///
/// The genre field keeps the raw pipe-separated string (e.g.
/// "Comedy|Romance") because genre filtering is substring containment on the
/// raw value; [`Movie::genre_terms`] tokenizes it for similarity scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display title
    pub title: String,
    /// Raw genre string, possibly empty
    pub genres: String,
}

impl Movie {
    /// Creates a new movie
    pub fn new(id: u32, title: impl Into<String>, genres: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.into(),
        }
    }

    /// Lowercased genre tokens: maximal alphanumeric runs of length >= 2.
    /// "Sci-Fi" yields ["sci", "fi"], an empty genre string yields nothing.
    pub fn genre_terms(&self) -> Vec<String> {
        tokenize(&self.genres)
    }
}

/// A single rating observation from the log
///
/// The same (user_id, movie_id) pair may appear more than once; consumers
/// always aggregate by grouping rather than assuming uniqueness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub value: f64,
}

impl Rating {
    /// Creates a new rating observation
    pub fn new(user_id: u32, movie_id: u32, value: f64) -> Self {
        Self {
            user_id,
            movie_id,
            value,
        }
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_lowercase())
        .collect()
}
