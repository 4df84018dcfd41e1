//! 19x19 Go board core: legality, capture, chain rings, incremental Zobrist
//! hashing with a bounded repetition window, and 3x3 pattern codes.

pub mod benchmark;
pub mod board;
pub mod chain;
pub mod error;
pub mod fast_random;
pub mod hash;
pub mod nat_map;
pub mod nat_set;
pub mod pattern;
pub mod perf_counter;
pub mod topology;
pub mod types;

// Re-export main types
pub use benchmark::{Benchmark, BenchmarkConfig, BenchmarkReport};
pub use board::{Board, LegalMove};
pub use chain::ChainIter;
pub use error::BoardError;
pub use hash::{Hash, HashHistory, ZOBRIST};
pub use pattern::{Pattern, PatternCode, PATTERN_BITS};
pub use perf_counter::PerfCounter;
pub use topology::{vertex_nbr, TOPOLOGY};
pub use types::*;
