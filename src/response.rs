//! The `{"id": .., "message": ..}` envelope returned by the write endpoints.

use crate::service::{CreateOutcome, RatingRejected, UpdateOutcome};
use serde::{Deserialize, Serialize};

pub const BOOK_ADDED: &str = "Book added successfully";

/// Wire value of `id` when a create is rejected.
pub const REJECTED_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub id: i64,
    pub message: String,
}

impl MessageBody {
    pub fn rejected(id: i64, rejected: &RatingRejected) -> Self {
        MessageBody {
            id,
            message: rejected.to_string(),
        }
    }
}

pub fn created(outcome: CreateOutcome) -> MessageBody {
    match outcome {
        CreateOutcome::Created(id) => MessageBody {
            id,
            message: BOOK_ADDED.to_string(),
        },
        CreateOutcome::Rejected(r) => MessageBody::rejected(REJECTED_ID, &r),
    }
}

/// Success carries the row count in `id`; a rejection echoes the path id.
pub fn updated(id: i64, outcome: UpdateOutcome) -> MessageBody {
    match outcome {
        // Clients match on the trailing space.
        UpdateOutcome::Updated(rows) => MessageBody {
            id: rows as i64,
            message: format!("User updated successfully. Total rows/record affected {} ", rows),
        },
        UpdateOutcome::Rejected(r) => MessageBody::rejected(id, &r),
    }
}

pub fn deleted(id: i64, rows: u64) -> MessageBody {
    MessageBody {
        id,
        message: format!("User updated successfully. Total rows/record affected {}", rows),
    }
}
