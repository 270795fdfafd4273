//! Password criteria sections
//!
//! Each section checks one composition criterion of the password.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section check functions.
/// - `Some(suggestion)` - Criterion not met, with the advice to show
/// - `None` - Criterion met
pub type SectionResult = Option<&'static str>;
