//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for per-file import edges (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
