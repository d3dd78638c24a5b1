use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::FusionConfig;
use crate::models::{MethodResults, ScoredItem};

/// Reciprocal rank fusion over per-method ranked result lists.
///
/// Pipeline:
/// 1. Stable-sort each method's list by its own score descending (absent or
///    non-finite scores rank as zero). This re-establishes rank order even
///    if the caller's list was not perfectly pre-sorted, and score ties keep
///    the method's original order.
/// 2. The item at zero-based rank `r` contributes `1 / (r + k)`.
/// 3. Sum contributions per distinct `content` across all methods.
/// 4. Stable-sort by fused score descending.
///
/// Determinism rules:
/// - Methods are processed in the order they were inserted into `results`,
///   items in rank order within each method.
/// - Fused-score ties keep first-accumulation order.
/// - When the same `content` appears more than once, the last occurrence's
///   `metadata` wins.
///
/// Returns new items with `score` replaced by the fused value; the caller's
/// input lists are consumed, never mutated in place.
pub fn reciprocal_rank_fusion<M>(
    results: MethodResults<M>,
    config: &FusionConfig,
) -> Vec<ScoredItem<M>> {
    let k = config.effective_k();
    let method_count = results.len();

    // Fused entries in first-seen order; `index` maps content to position.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut fused: Vec<(f64, ScoredItem<M>)> = Vec::new();

    for (_method, mut items) in results {
        items.sort_by(|a, b| {
            b.rank_score()
                .partial_cmp(&a.rank_score())
                .unwrap_or(Ordering::Equal)
        });

        for (rank, item) in items.into_iter().enumerate() {
            let contribution = 1.0 / (rank as f64 + k);

            match index.get(&item.content) {
                Some(&pos) => {
                    let entry = &mut fused[pos];
                    entry.0 += contribution;
                    entry.1 = item;
                }
                None => {
                    index.insert(item.content.clone(), fused.len());
                    fused.push((contribution, item));
                }
            }
        }
    }

    // Stable sort: equal fused scores keep first-seen order.
    fused.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    tracing::debug!(
        "Fused {} method lists into {} distinct results (k={})",
        method_count,
        fused.len(),
        k
    );

    fused
        .into_iter()
        .map(|(score, mut item)| {
            item.score = Some(score);
            item
        })
        .collect()
}
