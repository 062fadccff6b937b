mod movie;

pub use movie::{Movie, Rating};
