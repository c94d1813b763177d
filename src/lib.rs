//! Integer pixel geometry for the window layer.
//!
//! [`Rectangle`] describes a half-open region `[left, right) x [top, bottom)`
//! in pixel-index space. Operations are total: an empty result is an ordinary
//! value that fails [`Rectangle::is_valid`], never an error.

mod error;
mod rect;

pub use error::{Error, ParseReason, Result};
pub use rect::{Labeled, Rectangle};
