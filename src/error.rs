use std::num::ParseIntError;

use crate::Rectangle;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("rectangle has no area: {rect}")]
    InvalidRectangle { rect: Rectangle },
    #[error("cannot parse {input:?} as a rectangle: {reason}")]
    Parse {
        input: String,
        #[source]
        reason: ParseReason,
    },
}

/// Why a string is not in the `l -> r; t -> b` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseReason {
    #[error("missing ';' between axes")]
    MissingAxisSeparator,
    #[error("missing '->' in span")]
    MissingArrow,
    #[error("invalid integer")]
    InvalidInteger(#[source] ParseIntError),
}
