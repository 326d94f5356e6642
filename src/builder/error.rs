//! Build errors for the hand driver builder.

use thiserror::Error;

/// Errors that can occur when building a [`HandDriver`](crate::HandDriver).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Hand not specified. Call .hand(id) before .build()")]
    MissingHand,
}
