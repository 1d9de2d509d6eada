//! FastSynteny - Collinear chaining of synteny anchors
//!
//! Reduces loosely collinear synteny blocks to their maximum-weight strictly
//! collinear chain and rebuilds ancestral gene orders from those chains.
//!
//! # Features
//!
//! - Windowed dynamic programming chainer, both orientations per block
//! - Lazy ancestral interleaving between trusted anchors
//! - Parallel block processing with rayon
//! - Support for compressed anchor and BED files (gzip, bzip2)
//!
//! # Example
//!
//! ```
//! use fast_synteny::{Anchor, Chainer, Interleave};
//!
//! let block = [
//!     Anchor::new(0, 5, 16.0),
//!     Anchor::new(1, 6, 16.0),
//!     Anchor::new(2, 3, 16.0),
//!     Anchor::new(3, 7, 16.0),
//! ];
//! let chain = Chainer::default().best_chain(&block);
//! assert_eq!(chain.score, 12);
//!
//! let pairs = chain.rank_pairs();
//! let order: Vec<usize> = Interleave::new(&pairs).unwrap().collect();
//! assert_eq!(order, vec![0, 5, 1, 6, 2, 3, 7]);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    is_collinear, Anchor, ChainConfig, Chainer, CollinearChain, Interleave, InterleaveError,
    Orientation, Result, SyntenyError, DEFAULT_WINDOW,
};
pub use formats::{AnchorFile, BedFile};
