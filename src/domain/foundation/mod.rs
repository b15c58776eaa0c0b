//! Foundation types shared across the domain.
//!
//! - `ValidationError` - Rejected caller input (short text, missing upload)
//! - `Timestamp` - UTC instant used for export envelopes

mod errors;
mod timestamp;

pub use errors::ValidationError;
pub use timestamp::Timestamp;
