//! Ancestral gene order by interleaving
//!
//! Between two consecutive trusted anchors `(a, b)` and `(c, d)` the genes
//! unique to either genome are merged position by position, assuming local
//! gene order is roughly conserved even where no anchor exists. This is the
//! bottom-up reconstruction of Bowers et al. (2003) and Tang et al. (2010).

use crate::core::error::InterleaveError;
use itertools::{Either, EitherOrBoth, Itertools};

/// Lazy ancestral order over a chain of `(query, subject)` rank pairs
///
/// Yields each rank exactly once in merged order; it is consumed once and
/// cannot be restarted.
///
/// # Example
/// ```
/// use fast_synteny::core::Interleave;
///
/// let pairs = [(0, 0), (3, 4)];
/// let order: Vec<usize> = Interleave::new(&pairs).unwrap().collect();
/// assert_eq!(order, vec![0, 0, 1, 1, 2, 2, 3, 3, 4]);
/// ```
pub struct Interleave<'a> {
    inner: Box<dyn Iterator<Item = usize> + 'a>,
    remaining: usize,
}

impl<'a> Interleave<'a> {
    /// Validate the chain and prepare the merged order
    ///
    /// Query ranks must strictly increase from pair to pair. Subject ranks
    /// may run in either direction. A violation rejects the whole chain
    /// before anything is produced.
    pub fn new(pairs: &'a [(usize, usize)]) -> Result<Self, InterleaveError> {
        for (index, window) in pairs.windows(2).enumerate() {
            let (previous, next) = (window[0].0, window[1].0);
            if previous >= next {
                return Err(InterleaveError::QueryNotIncreasing {
                    index: index + 1,
                    previous,
                    next,
                });
            }
        }

        let head = pairs.first().into_iter().flat_map(|&(a, b)| [a, b]);
        let tail = pairs.windows(2).flat_map(|window| {
            let (a, b) = window[0];
            let (c, d) = window[1];
            gap_walk(a, b, c, d).chain([c, d])
        });

        Ok(Self {
            inner: Box::new(head.chain(tail)),
            remaining: interleaved_len(pairs),
        })
    }
}

impl Iterator for Interleave<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Interleave<'_> {}

/// Subject-side gap between `b` and `d`, walked away from `b`
fn subject_gap(b: usize, d: usize) -> impl Iterator<Item = usize> {
    if b < d {
        Either::Left(b + 1..d)
    } else {
        Either::Right((d + 1..b).rev())
    }
}

/// Lockstep walk of the query gap `a+1..c` and the subject gap
fn gap_walk(a: usize, b: usize, c: usize, d: usize) -> impl Iterator<Item = usize> {
    (a + 1..c)
        .zip_longest(subject_gap(b, d))
        .flat_map(|step| match step {
            EitherOrBoth::Both(x, y) => [Some(x), Some(y)],
            EitherOrBoth::Left(x) => [Some(x), None],
            EitherOrBoth::Right(y) => [None, Some(y)],
        })
        .flatten()
}

/// Number of ranks the interleaver yields for `pairs`
///
/// Two per pair plus the gap lengths on both sides between neighbours.
pub fn interleaved_len(pairs: &[(usize, usize)]) -> usize {
    let gaps: usize = pairs
        .windows(2)
        .map(|w| {
            let (a, b) = w[0];
            let (c, d) = w[1];
            c.saturating_sub(a + 1) + b.abs_diff(d).saturating_sub(1)
        })
        .sum();
    2 * pairs.len() + gaps
}
