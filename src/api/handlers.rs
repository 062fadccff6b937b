use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::Recommender;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PopularityRequest {
    pub genre: String,
    pub min_reviews: usize,
    pub top_n: usize,
}

#[derive(Debug, Serialize)]
pub struct PopularityResponse {
    pub title: String,
    pub average_rating: f64,
    pub num_ratings: usize,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub movie_title: String,
    pub top_n: usize,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub title: String,
    pub similarity: f64,
}

#[derive(Debug, Deserialize)]
pub struct CollaborativeRequest {
    pub user_id: u32,
    pub top_n: usize,
    pub k_similar_users: usize,
}

/// Ratings and scores render with two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Popularity-based recommendations within a genre
pub async fn popularity_recommendations(
    State(state): State<AppState>,
    Json(request): Json<PopularityRequest>,
) -> Json<Vec<PopularityResponse>> {
    let recommender = Recommender::new(&state.catalog, &state.ratings, &state.genre_index);
    let results = recommender.by_popularity(&request.genre, request.min_reviews, request.top_n);

    Json(
        results
            .into_iter()
            .map(|entry| PopularityResponse {
                title: entry.title,
                average_rating: round2(entry.average_rating),
                num_ratings: entry.num_ratings,
            })
            .collect(),
    )
}

/// Content-based recommendations around an anchor movie
pub async fn content_recommendations(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> AppResult<Json<Vec<ContentResponse>>> {
    let recommender = Recommender::new(&state.catalog, &state.ratings, &state.genre_index);
    let results = recommender.by_content(&request.movie_title, request.top_n)?;

    Ok(Json(
        results
            .into_iter()
            .map(|m| ContentResponse {
                title: m.title,
                similarity: round2(m.similarity),
            })
            .collect(),
    ))
}

/// Collaborative-filtering recommendations for a user
pub async fn collaborative_recommendations(
    State(state): State<AppState>,
    Json(request): Json<CollaborativeRequest>,
) -> AppResult<Json<Vec<String>>> {
    let recommender = Recommender::new(&state.catalog, &state.ratings, &state.genre_index);
    let titles =
        recommender.by_collaborative(request.user_id, request.top_n, request.k_similar_users)?;
    Ok(Json(titles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.0 / 3.0), 1.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(4.5), 4.5);
    }
}
