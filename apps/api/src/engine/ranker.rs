use crate::engine::catalog::ContentCatalog;
use crate::engine::vectorizer::l2_norm;
use crate::engine::EngineError;

/// One scored catalog entry: original catalog index plus cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedIndex {
    pub index: usize,
    pub similarity: f64,
}

/// Cosine similarity between two vectors of equal length.
///
/// A zero-norm vector has no direction; similarity is defined as 0.0 for
/// that case instead of dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

/// Scores every catalog item against the query vector and returns the top
/// `k`.
///
/// Ordering is descending similarity; ties break by ascending original
/// catalog index, so the result is reproducible regardless of the sort
/// implementation. `k` beyond the catalog size simply returns the whole
/// ranked catalog; `k == 0` is an argument error, never silently clamped.
pub fn rank_top_k(
    catalog: &ContentCatalog,
    query: &[f64],
    k: usize,
) -> Result<Vec<RankedIndex>, EngineError> {
    if k == 0 {
        return Err(EngineError::InvalidTopK);
    }
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<RankedIndex> = catalog
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| RankedIndex {
            index,
            similarity: cosine_similarity(query, &item.vector),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    ranked.truncate(k);
    Ok(ranked)
}
