use thiserror::Error;

use crate::{catalog::BikeStatus, core::QuoteError};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("`{bike}` cannot be booked: {status}")]
    Unavailable { bike: String, status: BikeStatus },

    #[error("bike identifier must not be empty")]
    MissingBike,

    /// The quote bills nothing. It is never turned into a zero-priced intent.
    #[error("the quote bills nothing")]
    EmptyQuote,
}
