//! Error types for FastSynteny
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FastSynteny operations
#[derive(Debug, Error)]
pub enum SyntenyError {
    /// Anchor file parsing errors
    #[error("Anchor parse error: {0}")]
    AnchorParse(#[from] AnchorParseError),

    /// BED file parsing errors
    #[error("BED parse error: {0}")]
    BedParse(#[from] BedParseError),

    /// Gene id resolution errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Ancestral interleaving errors
    #[error("Interleave error: {0}")]
    Interleave(#[from] InterleaveError),

    /// A named block could not be interleaved
    #[error("Block {block}: {source}")]
    InvalidBlock {
        block: String,
        #[source]
        source: InterleaveError,
    },

    /// Adjacency graph errors
    #[error("Adjacency error: {0}")]
    Adjacency(#[from] AdjacencyError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during anchor file parsing
#[derive(Debug, Error)]
pub enum AnchorParseError {
    /// Data line with fewer than three columns
    #[error("Too few fields at line {line}: expected at least 3, found {found}")]
    TooFewFields { line: usize, found: usize },

    /// Score column is not a non-negative finite number
    #[error("Invalid weight '{value}' at line {line}: expected a non-negative number")]
    InvalidWeight { line: usize, value: String },

    /// File not found
    #[error("Anchor file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during BED file parsing
#[derive(Debug, Error)]
pub enum BedParseError {
    #[error("Empty line")]
    EmptyLine,

    #[error("Too few fields at line {line}: expected at least {expected}, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid UTF-8 in field {field} at line {line}")]
    InvalidUtf8 { line: usize, field: &'static str },

    #[error("Invalid number in field {field} at line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("BED file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while resolving gene identifiers through a gene order table
#[derive(Debug, Error)]
pub enum LookupError {
    /// Gene id absent from the BED table
    #[error("Gene '{accn}' not found in {bed}")]
    UnknownGene { accn: String, bed: String },

    /// Rank outside the BED table
    #[error("Rank {rank} out of range for {bed} ({len} genes)")]
    RankOutOfRange { rank: usize, len: usize, bed: String },

    /// BED paths could not be inferred from the anchor file name
    #[error("Cannot infer BED files from '{0}': expected a name like a.b.anchors")]
    CannotInferBeds(PathBuf),
}

/// Errors raised by the ancestral interleaver
///
/// A violation means the chain was built incorrectly upstream; the chain
/// is rejected as a whole and nothing is produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterleaveError {
    /// Query ranks must strictly increase along the chain
    #[error("Query rank not increasing at pair {index}: {previous} -> {next}")]
    QueryNotIncreasing {
        index: usize,
        previous: usize,
        next: usize,
    },
}

/// Errors that can occur while reading adjacency files
#[derive(Debug, Error)]
pub enum AdjacencyError {
    /// Gene order line appeared before any `genome` header
    #[error("Gene order at line {line} precedes any 'genome' header")]
    MissingGenome { line: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FastSynteny operations
pub type Result<T> = std::result::Result<T, SyntenyError>;

/// Result type alias for anchor parsing operations
pub type AnchorResult<T> = std::result::Result<T, AnchorParseError>;

/// Result type alias for BED parsing operations
pub type BedResult<T> = std::result::Result<T, BedParseError>;
