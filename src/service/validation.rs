//! Rating range rule. Checked before anything reaches the store.

use thiserror::Error;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 3.0;

/// A rating outside `[RATING_MIN, RATING_MAX]`. The display text is what clients see.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Rating needs to be in range 1-3")]
pub struct RatingRejected {
    pub rating: f64,
}

/// NaN never passes.
pub fn check_rating(rating: f64) -> Result<(), RatingRejected> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(RatingRejected { rating })
    }
}
