use thiserror::Error;

/// Conditions under which no price can be computed.
///
/// Both are recoverable: the caller shows a «cannot compute» state and disables booking.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum QuoteError {
    /// The pickup or drop instant is missing or could not be parsed.
    #[error("invalid rental window: `{input}` is not a valid {part}")]
    InvalidWindow { part: &'static str, input: String },

    /// The rate plan has no usable tier.
    #[error("no rate is defined for this bike")]
    NoRateDefined,
}

impl QuoteError {
    pub(crate) fn invalid_window(part: &'static str, input: &str) -> Self {
        Self::InvalidWindow { part, input: input.to_owned() }
    }
}
