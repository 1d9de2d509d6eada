//! Anchor and block model
//!
//! An anchor is a matched gene pair between two coordinate systems. Both
//! positions are ranks (gene order indices) in their own genome, not
//! base-pair coordinates.

/// A single synteny anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Rank of the gene in the query genome
    pub query: usize,
    /// Rank of the gene in the subject genome
    pub subject: usize,
    /// Raw similarity score, non-negative
    pub weight: f64,
}

impl Anchor {
    /// Create an anchor
    ///
    /// `weight` must be finite and non-negative; anchor files are checked
    /// when parsed, other callers are checked in debug builds.
    pub fn new(query: usize, subject: usize, weight: f64) -> Self {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "anchor weight must be finite and non-negative, got {}",
            weight
        );
        Self {
            query,
            subject,
            weight,
        }
    }

    /// Dampened score contribution: `floor(sqrt(weight))`
    ///
    /// Compresses strong anchors so a few of them are not automatically
    /// outweighed by many weak ones, as a linear sum would allow.
    #[inline]
    pub fn dampened_score(&self) -> u64 {
        self.weight.sqrt().floor() as u64
    }
}

/// Relative direction of the two coordinate systems inside a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Orientation {
    /// Subject ranks increase with query ranks
    #[default]
    Ascending,
    /// Subject ranks decrease as query ranks increase
    Descending,
}

impl Orientation {
    /// Whether `next` may follow `prev` on the subject axis
    ///
    /// # Examples
    /// ```
    /// use fast_synteny::core::Orientation;
    ///
    /// assert!(Orientation::Ascending.is_successor(3, 7));
    /// assert!(Orientation::Descending.is_successor(7, 3));
    /// assert!(!Orientation::Descending.is_successor(3, 3));
    /// ```
    #[inline]
    pub fn is_successor(&self, prev: usize, next: usize) -> bool {
        match self {
            Orientation::Ascending => next > prev,
            Orientation::Descending => next < prev,
        }
    }

    /// Single-character label, `+` or `-`
    pub fn to_char(&self) -> char {
        match self {
            Orientation::Ascending => '+',
            Orientation::Descending => '-',
        }
    }
}

/// Check that anchors form a strictly collinear chain in the given orientation
pub fn is_collinear(anchors: &[Anchor], orientation: Orientation) -> bool {
    anchors.windows(2).all(|pair| {
        pair[0].query < pair[1].query && orientation.is_successor(pair[0].subject, pair[1].subject)
    })
}
