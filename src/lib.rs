//! Interactive password strength checker
//!
//! This library reads a password from the terminal with masked echo,
//! evaluates it against five composition criteria and renders a report
//! with improvement suggestions.
//!
//! # Features
//!
//! - `async`: Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use passchecker::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1!".to_string().into());
//! let assessment = evaluate_password_strength(&password);
//!
//! assert_eq!(assessment.strength(), PasswordStrength::Strong);
//! assert_eq!(assessment.score_points(), 5);
//! assert_eq!(assessment.score_percent(), 100);
//! ```

// Internal modules
mod evaluator;
mod input;
mod report;
mod sections;
mod session;
#[cfg(unix)]
mod signals;
mod types;

// Public API
pub use evaluator::{evaluate_password_strength, ALL_MET_SUGGESTION, MAX_POINTS};
pub use input::{
    decode_key, read_line, read_password, Echo, InputError, Key, KeySource,
    Prompter, RawModeGuard, TerminalKeys, TerminalPrompter,
};
pub use report::print_report;
pub use sections::MIN_LENGTH;
pub use session::{
    run, wants_another, write_cancelled, Outcome, CANCELLED_MESSAGE, PASSWORD_PROMPT,
    REPEAT_PROMPT,
};
#[cfg(unix)]
pub use signals::{cancel_on_signal, install_signal_handlers, TERMINATION_SIGNALS};
pub use types::{Assessment, Criteria, Criterion, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
