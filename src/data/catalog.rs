use std::collections::HashMap;

use crate::models::Movie;

/// Immutable in-memory table of movies
///
/// Built once at startup and shared read-only for the process lifetime.
/// Movie ids are unique; the original catalog row order is preserved because
/// title resolution and similarity tie-breaking both depend on it.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    /// Builds a catalog from parsed movie rows, keeping their order
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            by_id.entry(movie.id).or_insert(idx);
        }
        Self { movies, by_id }
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks up a movie by id
    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.by_id.get(&id).map(|&idx| &self.movies[idx])
    }

    /// Position of a movie within catalog order
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Resolves an exact title to the first matching movie in catalog order.
    /// Duplicate titles silently resolve to the first occurrence.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }
}
