//! BookService: rating rule plus store calls, returning tagged outcomes.

mod books;
mod validation;
pub use books::{BookService, CreateOutcome, UpdateOutcome};
pub use validation::{check_rating, RatingRejected, RATING_MAX, RATING_MIN};
