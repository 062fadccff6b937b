use std::collections::{HashMap, HashSet};

use crate::data::RatingLog;

/// Dense user-by-movie rating matrix over a restricted population
///
/// Rows are the users with at least one rating on a candidate movie, plus the
/// target user (an all-zero row when they rated no candidate). Columns are
/// the candidate movies that appear in the log. Both axes are sorted by id so
/// the layout is independent of log order and hash seeds. Missing cells are
/// 0; duplicate (user, movie) observations collapse to their mean.
#[derive(Debug, Clone)]
pub struct UserRatingMatrix {
    user_ids: Vec<u32>,
    movie_ids: Vec<u32>,
    rows: Vec<Vec<f64>>,
}

impl UserRatingMatrix {
    /// Builds the matrix for the given candidate movie set, returning it
    /// together with the target user's row position (always present, since
    /// the target user is inserted into the population)
    pub fn build(log: &RatingLog, candidates: &HashSet<u32>, target_user: u32) -> (Self, usize) {
        let mut user_ids: Vec<u32> = log
            .ratings()
            .iter()
            .filter(|r| candidates.contains(&r.movie_id))
            .map(|r| r.user_id)
            .collect();
        user_ids.push(target_user);
        user_ids.sort_unstable();
        user_ids.dedup();
        // target_user was just inserted, so its position in the sorted,
        // deduplicated row order is total
        let target_row = user_ids.partition_point(|&id| id < target_user);

        let mut movie_ids: Vec<u32> = log
            .ratings()
            .iter()
            .filter(|r| candidates.contains(&r.movie_id))
            .map(|r| r.movie_id)
            .collect();
        movie_ids.sort_unstable();
        movie_ids.dedup();

        let user_index: HashMap<u32, usize> =
            user_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let movie_index: HashMap<u32, usize> =
            movie_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut sums = vec![vec![0.0; movie_ids.len()]; user_ids.len()];
        let mut counts = vec![vec![0usize; movie_ids.len()]; user_ids.len()];
        for rating in log.ratings() {
            if !candidates.contains(&rating.movie_id) {
                continue;
            }
            let row = user_index[&rating.user_id];
            let col = movie_index[&rating.movie_id];
            sums[row][col] += rating.value;
            counts[row][col] += 1;
        }

        let rows = sums
            .into_iter()
            .zip(counts)
            .map(|(sum_row, count_row)| {
                sum_row
                    .into_iter()
                    .zip(count_row)
                    .map(|(sum, count)| if count == 0 { 0.0 } else { sum / count as f64 })
                    .collect()
            })
            .collect();

        (
            Self {
                user_ids,
                movie_ids,
                rows,
            },
            target_row,
        )
    }

    /// Number of users (rows)
    pub fn user_count(&self) -> usize {
        self.user_ids.len()
    }

    /// Column movie ids, ascending
    pub fn movie_ids(&self) -> &[u32] {
        &self.movie_ids
    }

    /// Row position of a user, if present
    pub fn row_of(&self, user_id: u32) -> Option<usize> {
        self.user_ids.binary_search(&user_id).ok()
    }

    /// Cosine similarity between one row and every row, itself included.
    /// A zero-norm row (no ratings on any column) has similarity 0 to
    /// everything, including itself.
    pub fn similarities_to(&self, row: usize) -> Vec<f64> {
        let target = &self.rows[row];
        self.rows.iter().map(|other| cosine(target, other)).collect()
    }

    /// Column-wise mean over the selected rows
    pub fn mean_of_rows(&self, selected: &[usize]) -> Vec<f64> {
        let mut means = vec![0.0; self.movie_ids.len()];
        if selected.is_empty() {
            return means;
        }
        for &row in selected {
            for (mean, value) in means.iter_mut().zip(&self.rows[row]) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= selected.len() as f64;
        }
        means
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
