mod genre_index;
mod recommender;
mod user_matrix;

pub use genre_index::GenreSimilarityIndex;
pub use recommender::{ContentMatch, PopularityEntry, Recommender};
pub use user_matrix::UserRatingMatrix;
