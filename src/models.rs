use serde::{Deserialize, Serialize};

/// A single retrieved result from one search method.
///
/// `content` is the canonical text of the result and serves as the
/// deduplication identity during fusion: two items are the same result if
/// and only if their `content` is byte-equal. No trimming, case-folding, or
/// other normalization is applied.
///
/// `metadata` is an opaque payload (source path, chunk offsets, citation
/// info, ...) carried through fusion unchanged. Adapters at the retrieval
/// boundary convert backend-specific result types into this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem<M = ()> {
    /// Canonical text of the result; the deduplication key.
    pub content: String,
    /// Relevance score assigned by the originating search method.
    /// Absent or non-finite scores rank as zero within that method's list.
    pub score: Option<f64>,
    /// Opaque payload associated 1:1 with `content`.
    pub metadata: M,
}

impl ScoredItem {
    pub fn new(content: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            content: content.into(),
            score,
            metadata: (),
        }
    }
}

impl<M> ScoredItem<M> {
    pub fn with_metadata(content: impl Into<String>, score: Option<f64>, metadata: M) -> Self {
        Self {
            content: content.into(),
            score,
            metadata,
        }
    }

    /// The score used for within-method rank ordering: the method's own
    /// score if finite, `0.0` otherwise (missing, NaN, ±inf).
    pub fn rank_score(&self) -> f64 {
        match self.score {
            Some(s) if s.is_finite() => s,
            _ => 0.0,
        }
    }
}

/// Ordered result lists from multiple search methods for one query.
///
/// Keys (method names) are unique; inserting a method again replaces its
/// list. Methods are kept in insertion order, and fusion processes them in
/// that order, which is what makes tie-breaking and duplicate-payload
/// resolution deterministic.
///
/// Result sets are ephemeral: built per query, consumed once by fusion.
#[derive(Debug, Clone)]
pub struct MethodResults<M = ()> {
    methods: Vec<(String, Vec<ScoredItem<M>>)>,
}

impl<M> MethodResults<M> {
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// Add (or replace) one method's ranked result list.
    pub fn insert(&mut self, method: impl Into<String>, items: Vec<ScoredItem<M>>) {
        let method = method.into();
        if let Some(entry) = self.methods.iter_mut().find(|(name, _)| *name == method) {
            entry.1 = items;
        } else {
            self.methods.push((method, items));
        }
    }

    pub fn get(&self, method: &str) -> Option<&[ScoredItem<M>]> {
        self.methods
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, items)| items.as_slice())
    }

    /// Number of methods (not items).
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredItem<M>])> {
        self.methods
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }
}

impl<M> Default for MethodResults<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> IntoIterator for MethodResults<M> {
    type Item = (String, Vec<ScoredItem<M>>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.into_iter()
    }
}

impl<M> FromIterator<(String, Vec<ScoredItem<M>>)> for MethodResults<M> {
    fn from_iter<I: IntoIterator<Item = (String, Vec<ScoredItem<M>>)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (method, items) in iter {
            results.insert(method, items);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_score_treats_missing_as_zero() {
        assert_eq!(ScoredItem::new("a", None).rank_score(), 0.0);
        assert_eq!(ScoredItem::new("a", Some(0.7)).rank_score(), 0.7);
    }

    #[test]
    fn test_rank_score_treats_non_finite_as_zero() {
        assert_eq!(ScoredItem::new("a", Some(f64::NAN)).rank_score(), 0.0);
        assert_eq!(ScoredItem::new("a", Some(f64::INFINITY)).rank_score(), 0.0);
        assert_eq!(ScoredItem::new("a", Some(f64::NEG_INFINITY)).rank_score(), 0.0);
    }

    #[test]
    fn test_insert_replaces_existing_method() {
        let mut results = MethodResults::new();
        results.insert("vector", vec![ScoredItem::new("a", Some(1.0))]);
        results.insert("vector", vec![ScoredItem::new("b", Some(2.0))]);

        assert_eq!(results.len(), 1);
        let items = results.get("vector").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "b");
    }

    #[test]
    fn test_methods_keep_insertion_order() {
        let mut results: MethodResults<()> = MethodResults::new();
        results.insert("vector", vec![]);
        results.insert("bm25", vec![]);
        results.insert("keyword", vec![]);

        let names: Vec<&str> = results.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["vector", "bm25", "keyword"]);
    }

    #[test]
    fn test_scored_item_serde_round_trip() {
        let item = ScoredItem::with_metadata(
            "fn main() {}",
            Some(0.92),
            serde_json::json!({ "file_path": "src/main.rs", "start_line": 1 }),
        );
        let json = serde_json::to_string(&item).unwrap();
        let back: ScoredItem<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
