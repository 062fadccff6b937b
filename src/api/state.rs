use std::sync::Arc;

use crate::data::{Catalog, RatingLog};
use crate::services::GenreSimilarityIndex;

/// Shared application state
///
/// Both tables are loaded once at startup and never mutated, so they are
/// shared across request handlers without locking. The genre index is a pure
/// function of the catalog and is computed here so queries reuse it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ratings: Arc<RatingLog>,
    pub genre_index: Arc<GenreSimilarityIndex>,
}

impl AppState {
    /// Builds shared state from loaded tables
    pub fn new(catalog: Catalog, ratings: RatingLog) -> Self {
        let genre_index = GenreSimilarityIndex::build(&catalog);
        Self {
            catalog: Arc::new(catalog),
            ratings: Arc::new(ratings),
            genre_index: Arc::new(genre_index),
        }
    }
}
