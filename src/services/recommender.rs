use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::data::{Catalog, MovieStats, RatingLog};
use crate::error::{AppError, AppResult};
use crate::services::{GenreSimilarityIndex, UserRatingMatrix};

/// One popularity-ranked result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PopularityEntry {
    pub title: String,
    pub average_rating: f64,
    pub num_ratings: usize,
}

/// One content-similarity result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentMatch {
    pub title: String,
    pub similarity: f64,
}

/// The three recommendation strategies over shared immutable tables
///
/// Every query is a pure read: the catalog, the rating log, and the genre
/// index are never mutated, so calling a strategy twice with identical
/// arguments yields identical output.
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    ratings: &'a RatingLog,
    genre_index: &'a GenreSimilarityIndex,
}

impl<'a> Recommender<'a> {
    pub fn new(
        catalog: &'a Catalog,
        ratings: &'a RatingLog,
        genre_index: &'a GenreSimilarityIndex,
    ) -> Self {
        Self {
            catalog,
            ratings,
            genre_index,
        }
    }

    /// Popularity-based recommendation within a genre
    ///
    /// The genre filter is substring containment on the raw genre string, so
    /// "Com" matches both "Comedy" and "Romantic Comedy". Movies with fewer
    /// than `min_reviews` ratings are dropped; results sort by average
    /// rating, then rating count, then title, all ties broken
    /// deterministically.
    pub fn by_popularity(
        &self,
        genre: &str,
        min_reviews: usize,
        top_n: usize,
    ) -> Vec<PopularityEntry> {
        // Join the log against the genre-filtered catalog, grouping by movie
        let mut groups: HashMap<u32, MovieStats> = HashMap::new();
        for rating in self.ratings.ratings() {
            let Some(movie) = self.catalog.get(rating.movie_id) else {
                continue;
            };
            if movie.genres.contains(genre) {
                let stats = groups.entry(rating.movie_id).or_default();
                stats.sum += rating.value;
                stats.count += 1;
            }
        }

        let mut entries: Vec<PopularityEntry> = groups
            .into_iter()
            .filter(|(_, stats)| stats.count >= min_reviews)
            .filter_map(|(movie_id, stats)| {
                self.catalog.get(movie_id).map(|movie| PopularityEntry {
                    title: movie.title.clone(),
                    average_rating: stats.mean(),
                    num_ratings: stats.count,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
                .then(b.num_ratings.cmp(&a.num_ratings))
                .then_with(|| a.title.cmp(&b.title))
        });
        entries.truncate(top_n);

        debug!(genre, results = entries.len(), "popularity query");
        entries
    }

    /// Content-based recommendation around an anchor movie
    ///
    /// The title must match a catalog entry exactly; when duplicate titles
    /// exist the first occurrence in catalog order is the anchor. Similarity
    /// is the linear kernel over TF-IDF genre vectors. The anchor itself is
    /// never part of the result.
    pub fn by_content(&self, movie_title: &str, top_n: usize) -> AppResult<Vec<ContentMatch>> {
        let anchor_pos = self
            .catalog
            .find_by_title(movie_title)
            .and_then(|movie| self.catalog.position_of(movie.id))
            .ok_or_else(|| AppError::NotFound(format!("no movie titled {:?}", movie_title)))?;

        let mut scored: Vec<(usize, f64)> = (0..self.catalog.len())
            .filter(|&pos| pos != anchor_pos)
            .map(|pos| (pos, self.genre_index.similarity(anchor_pos, pos)))
            .collect();

        // Stable sort: equal similarities keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_n);

        debug!(movie_title, results = scored.len(), "content query");
        Ok(scored
            .into_iter()
            .map(|(pos, similarity)| ContentMatch {
                title: self.catalog.movies()[pos].title.clone(),
                similarity,
            })
            .collect())
    }

    /// Collaborative-filtering recommendation for a user
    ///
    /// Candidate movies are those the target user has not rated whose total
    /// rating count is below `k_similar_users`; the same parameter then
    /// serves as the neighbor count over the restricted user population (the
    /// dual use is inherited behavior, kept for parity). Neighbors are the
    /// last k rows of an ascending similarity sort; their rating vectors are
    /// averaged column-wise and the best-scored movie ids resolve to titles.
    pub fn by_collaborative(
        &self,
        user_id: u32,
        top_n: usize,
        k_similar_users: usize,
    ) -> AppResult<Vec<String>> {
        if k_similar_users == 0 {
            return Err(AppError::InvalidArgument(
                "k_similar_users must be at least 1".to_string(),
            ));
        }
        if !self.ratings.has_user(user_id) {
            return Err(AppError::NotFound(format!(
                "no ratings from user {}",
                user_id
            )));
        }

        let rated = self.ratings.movies_rated_by(user_id);
        let candidates: HashSet<u32> = self
            .ratings
            .movie_stats()
            .into_iter()
            .filter(|(movie_id, stats)| {
                !rated.contains(movie_id) && stats.count < k_similar_users
            })
            .map(|(movie_id, _)| movie_id)
            .collect();

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let (matrix, target_row) = UserRatingMatrix::build(self.ratings, &candidates, user_id);
        let similarities = matrix.similarities_to(target_row);

        // Ascending stable sort, then the last k rows; equal similarities
        // keep user-id order, which is the documented tie behavior
        let mut order: Vec<usize> = (0..matrix.user_count()).collect();
        order.sort_by(|&a, &b| {
            similarities[a]
                .partial_cmp(&similarities[b])
                .unwrap_or(Ordering::Equal)
        });
        let k = k_similar_users.min(order.len());
        let neighbors = &order[order.len() - k..];

        let scores = matrix.mean_of_rows(neighbors);
        let mut ranked: Vec<(u32, f64)> = matrix
            .movie_ids()
            .iter()
            .copied()
            .zip(scores)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(top_n);

        debug!(user_id, results = ranked.len(), "collaborative query");
        // Dangling movie ids (rated but absent from the catalog) are skipped
        Ok(ranked
            .into_iter()
            .filter_map(|(movie_id, _)| self.catalog.get(movie_id))
            .map(|movie| movie.title.clone())
            .collect())
    }
}
