//! Core synteny algorithms
//!
//! This module contains the anchor model, the windowed collinear chainer,
//! the ancestral interleaver and shared I/O helpers.

mod anchor;
mod collinear;
pub mod error;
mod interleave;
pub mod io;

pub use anchor::{is_collinear, Anchor, Orientation};
pub use collinear::{ChainConfig, Chainer, CollinearChain, DEFAULT_WINDOW};
pub use error::{
    AdjacencyError, AnchorParseError, AnchorResult, BedParseError, BedResult, InterleaveError,
    LookupError, Result, SyntenyError,
};
pub use interleave::{interleaved_len, Interleave};
pub use io::{create_writer, detect_compression, open_reader, CompressionFormat, DEFAULT_BUFFER_SIZE};
