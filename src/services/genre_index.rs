use std::collections::HashMap;

use crate::data::Catalog;

/// TF-IDF index over the catalog's genre vocabulary
///
/// Each movie's genre string is treated as a document and its genre tokens as
/// terms. Weights use smoothed inverse document frequency,
/// `ln((1 + n) / (1 + df)) + 1`, and every vector is l2-normalized, so the
/// dot product of two vectors is their cosine similarity (linear kernel).
///
/// The index is a pure function of the catalog: it may be built once and
/// cached process-wide, and rebuilding it from the same catalog yields the
/// same weights.
#[derive(Debug, Clone)]
pub struct GenreSimilarityIndex {
    /// One sparse weighted vector per movie, parallel to catalog order
    vectors: Vec<HashMap<String, f64>>,
}

impl GenreSimilarityIndex {
    /// Builds the index from every movie in the catalog
    pub fn build(catalog: &Catalog) -> Self {
        let documents: Vec<Vec<String>> =
            catalog.movies().iter().map(|m| m.genre_terms()).collect();

        // Document frequency per term
        let mut df: HashMap<&str, usize> = HashMap::new();
        for terms in &documents {
            let mut seen: Vec<&str> = Vec::new();
            for term in terms {
                if !seen.contains(&term.as_str()) {
                    seen.push(term.as_str());
                    *df.entry(term.as_str()).or_insert(0) += 1;
                }
            }
        }

        let total_docs = documents.len() as f64;
        let vectors = documents
            .iter()
            .map(|terms| {
                let mut tf: HashMap<&str, f64> = HashMap::new();
                for term in terms {
                    *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
                }

                let mut vector: HashMap<String, f64> = tf
                    .into_iter()
                    .map(|(term, count)| {
                        let doc_freq = df[term] as f64;
                        let idf = ((1.0 + total_docs) / (1.0 + doc_freq)).ln() + 1.0;
                        (term.to_string(), count * idf)
                    })
                    .collect();

                let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for weight in vector.values_mut() {
                        *weight /= norm;
                    }
                }
                vector
            })
            .collect();

        Self { vectors }
    }

    /// Number of indexed movies
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The weighted genre vector for the movie at this catalog position
    pub fn vector(&self, position: usize) -> &HashMap<String, f64> {
        &self.vectors[position]
    }

    /// Cosine similarity between two indexed movies.
    /// A movie with no genre terms has a zero vector and similarity 0 to
    /// everything.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        let (small, large) = if self.vectors[a].len() <= self.vectors[b].len() {
            (&self.vectors[a], &self.vectors[b])
        } else {
            (&self.vectors[b], &self.vectors[a])
        };

        small
            .iter()
            .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn sample_index() -> (Catalog, GenreSimilarityIndex) {
        let catalog = Catalog::new(vec![
            Movie::new(1, "A", "Comedy"),
            Movie::new(2, "B", "Drama"),
            Movie::new(3, "C", "Comedy|Drama"),
            Movie::new(4, "D", ""),
        ]);
        let index = GenreSimilarityIndex::build(&catalog);
        (catalog, index)
    }

    #[test]
    fn test_identical_genres_have_unit_similarity() {
        let (_, index) = sample_index();
        assert!((index.similarity(0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shared_term_beats_disjoint() {
        let (_, index) = sample_index();
        let shared = index.similarity(0, 2); // Comedy vs Comedy|Drama
        let disjoint = index.similarity(0, 1); // Comedy vs Drama
        assert!(shared > 0.0);
        assert_eq!(disjoint, 0.0);
    }

    #[test]
    fn test_empty_genres_zero_vector() {
        let (_, index) = sample_index();
        assert!(index.vector(3).is_empty());
        assert_eq!(index.similarity(3, 0), 0.0);
        assert_eq!(index.similarity(3, 3), 0.0);
    }

    #[test]
    fn test_rarer_term_weighs_more() {
        // "comedy" appears in two documents, "drama" in two as well, but in
        // C's vector both terms are present; against a single-term movie the
        // overlap uses only the shared term.
        let catalog = Catalog::new(vec![
            Movie::new(1, "A", "Comedy"),
            Movie::new(2, "B", "Comedy"),
            Movie::new(3, "C", "Comedy|Western"),
            Movie::new(4, "D", "Western"),
        ]);
        let index = GenreSimilarityIndex::build(&catalog);
        // Within C, "western" (df=2) outweighs "comedy" (df=3)
        let c = index.vector(2);
        assert!(c["western"] > c["comedy"]);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let (catalog, index) = sample_index();
        let rebuilt = GenreSimilarityIndex::build(&catalog);
        for i in 0..index.len() {
            for j in 0..index.len() {
                assert_eq!(index.similarity(i, j), rebuilt.similarity(i, j));
            }
        }
    }
}
