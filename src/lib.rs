//! Lazy indexed pairing with signed start offsets.
//!
//! Give this crate any source of values (empty, finite, or unbounded) and an
//! optional integer start, and it hands back a lazy sequence of
//! `(index, value)` pairs. The n-th pair always carries `start + n`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│ enumerate.rs │────▶│  render.rs  │
//! │(IndexedPair,│     │ (Enumerate,  │     │ (Repr, list │
//! │   Index)    │     │ EnumerateArgs│     │  literals)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            contracts.rs  +  verify/                 │
//! │  (debug assertions, ValidatedPairs, InvariantError) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `conformance` bundles the reference calls and their expected output; the
//! `tally` binary runs them and exposes the adapter on the command line.
//!
//! # Usage
//!
//! ```
//! use tally::{enumerate_from, render_pairs};
//!
//! let pairs: Vec<_> = enumerate_from([1, 2, 3], -5).collect();
//! assert_eq!(render_pairs(&pairs), "[(-5, 1), (-4, 2), (-3, 3)]");
//! ```

// Module declarations
pub mod conformance;
pub mod contracts;
mod enumerate;
pub mod render;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use enumerate::{enumerate, enumerate_from, Enumerate, EnumerateArgs, IndexedIteratorExt};
pub use render::{render_json, render_pairs, Literal, Repr};
pub use types::{Index, IndexedPair, DEFAULT_START};
pub use verify::{verify_against_source, InvariantError, ValidatedPairs, VerificationReport};
