//! Guillotine nesting core for rectangular panel parts cut from stock sheets.
//!
//! Given a list of required parts (quantity, grain constraint, edge-banding
//! flags, lamination class) and a stock sheet definition, [`pack`] produces a
//! deterministic placement plan: every part instance is assigned a position
//! and rotation on one of a sequence of sheets, minimizing sheet count and
//! waste while respecting grain constraints and accounting edge-banding
//! length per thickness class. [`pack_optimized`] evaluates several sort
//! strategies and keeps the best plan.
//!
//! The algorithm is an explicitly documented fast heuristic, not an exact
//! solver: it accepts a sub-optimal (but never geometrically invalid)
//! packing in exchange for deterministic, bounded-time execution.

/// Configuration of the packing algorithm
pub mod config;

/// Entities to model the panel nesting problem
pub mod entities;

/// Geometric primitives of the guillotine packer
pub mod geometry;

/// External (serializable) representations and their normalization
pub mod io;

/// The packing algorithm: scorer, free-space manager, packer and optimizer
pub mod opt;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use opt::sort::SortStrategy;
#[doc(inline)]
pub use opt::{pack, pack_optimized, OptimizedLayoutResult};
