//! Filter engine
//!
//! Likes and review thresholds are soft filters: a record passes a threshold
//! with a probability proportional to it, and the draw is repeated every time
//! the visible set is recomputed. Two recomputations with the same inputs can
//! therefore show different rows.

use crate::book::BookRecord;
use crate::input::finite_or_zero;
use crate::random::RandomSource;

/// Which threshold a filter control edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Likes,
    Review,
}

impl FilterKind {
    /// Largest meaningful threshold for this kind
    pub fn max(self) -> f64 {
        match self {
            FilterKind::Likes => 10.0,
            FilterKind::Review => 5.0,
        }
    }

    /// Bring an arbitrary value into `[0, max]`, treating NaN/inf as zero
    pub fn clamp(self, value: f64) -> f64 {
        finite_or_zero(value).clamp(0.0, self.max())
    }
}

/// Active threshold values. Zero disables a threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub likes: f64,
    pub review: f64,
}

impl Thresholds {
    /// True when no threshold contributes a predicate
    pub fn is_inactive(&self) -> bool {
        self.likes == 0.0 && self.review == 0.0
    }

    fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(2);
        if self.likes != 0.0 {
            predicates.push(Predicate::Likes(self.likes));
        }
        if self.review != 0.0 {
            predicates.push(Predicate::Review(self.review));
        }
        predicates
    }
}

#[derive(Debug, Clone, Copy)]
enum Predicate {
    Likes(f64),
    Review(f64),
}

impl Predicate {
    /// Only draws when the record's own value is non-zero
    fn passes(self, book: &BookRecord, rng: &mut impl RandomSource) -> bool {
        match self {
            Predicate::Likes(v) => book.likes > 0 && rng.next_unit() < v / 10.0,
            Predicate::Review(v) => book.review > 0.0 && rng.next_unit() < v,
        }
    }
}

/// Recompute the visible set from the full window.
///
/// Keeps window order. Predicates short-circuit in the order likes, review.
pub fn apply_filters(
    all_books: &[BookRecord],
    thresholds: &Thresholds,
    rng: &mut impl RandomSource,
) -> Vec<BookRecord> {
    if thresholds.is_inactive() {
        return all_books.to_vec();
    }
    let predicates = thresholds.predicates();

    all_books
        .iter()
        .filter(|book| predicates.iter().all(|p| p.passes(book, &mut *rng)))
        .cloned()
        .collect()
}
