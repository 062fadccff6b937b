mod catalog;
mod loader;
mod ratings;

pub use catalog::Catalog;
pub use loader::{load_catalog, load_ratings};
pub use ratings::{MovieStats, RatingLog};
