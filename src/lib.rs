//! # rank-fusion
//!
//! Reciprocal Rank Fusion (RRF) for merging ranked result lists from
//! heterogeneous search methods into a single re-ranked list.
//!
//! In a hybrid retrieval pipeline, each search method (dense vector
//! similarity, sparse keyword/BM25 scoring, ...) returns results scored on
//! its own, incomparable scale. Rank position is the only signal that is
//! commensurable across methods, so fusion sums `1 / (rank + k)` per method
//! instead of mixing raw scores:
//!
//! ```text
//!        ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//!        │ vector hits │   │  bm25 hits  │   │     ...     │
//!        │  (cosine)   │   │   (sparse)  │   │             │
//!        └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!               │ ranked list     │ ranked list     │
//!               └─────────────────┼─────────────────┘
//!                                 ▼
//!                    ┌───────────────────────┐
//!                    │      RRF Fusion       │
//!                    │  score = Σ 1/(rank+k) │
//!                    │  dedup by content     │
//!                    └───────────┬───────────┘
//!                                │
//!                                ▼
//!                       single ranked list
//! ```
//!
//! The fusion step is pure and synchronous: the caller runs the search
//! methods (concurrently or not), collects their completed result lists into
//! a [`models::MethodResults`], and calls
//! [`fusion::reciprocal_rank_fusion`]. Retrieval backends, re-ranking, and
//! presentation all live outside this crate; adapters convert their result
//! types into [`models::ScoredItem`] at the boundary.
//!
//! ## Module Overview
//!
//! - [`config`] - The `k` damping constant: defaults and env-based loading
//! - [`models`] - `ScoredItem` and `MethodResults` data types
//! - [`fusion`] - The reciprocal rank fusion engine

pub mod config;
pub mod fusion;
pub mod models;
