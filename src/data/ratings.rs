use std::collections::{HashMap, HashSet};

use crate::models::Rating;

/// Per-movie aggregate over the rating log
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovieStats {
    pub sum: f64,
    pub count: usize,
}

impl MovieStats {
    /// Mean rating of the group; 0.0 for an empty group
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

/// Immutable in-memory table of (user, movie, rating) observations
///
/// Loaded once at startup and shared read-only. Movie ids may dangle
/// (reference no catalog row); genre-dependent consumers exclude them.
#[derive(Debug, Clone)]
pub struct RatingLog {
    ratings: Vec<Rating>,
}

impl RatingLog {
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self { ratings }
    }

    /// All observations in log order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Number of observations in the log
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Whether the log holds at least one observation from this user
    pub fn has_user(&self, user_id: u32) -> bool {
        self.ratings.iter().any(|r| r.user_id == user_id)
    }

    /// Groups the whole log by movie id
    pub fn movie_stats(&self) -> HashMap<u32, MovieStats> {
        let mut stats: HashMap<u32, MovieStats> = HashMap::new();
        for rating in &self.ratings {
            stats.entry(rating.movie_id).or_default().add(rating.value);
        }
        stats
    }

    /// The set of movie ids this user has rated
    pub fn movies_rated_by(&self, user_id: u32) -> HashSet<u32> {
        self.ratings
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.movie_id)
            .collect()
    }
}
