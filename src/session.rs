//! Interactive check loop: read, evaluate, report, ask to repeat.

use std::io::{self, Write};

use secrecy::ExposeSecret;

use crate::evaluator::evaluate_password_strength;
use crate::input::{read_password, Echo, InputError, Prompter};
use crate::report::print_report;

pub const PASSWORD_PROMPT: &str = "Enter the password to check: ";
pub const REPEAT_PROMPT: &str = "Do you want to perform another check? (Y/N): ";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled. Goodbye.";

/// How a session ended. Every variant is a normal exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An empty password was entered.
    NoPassword,
    /// The user answered something other than yes.
    Declined,
    /// Ctrl+C or Ctrl+D at a prompt.
    Cancelled,
}

/// `y` or `yes`, ignoring case and surrounding whitespace.
pub fn wants_another(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Writes the cancellation notice on a fresh line.
pub fn write_cancelled<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", CANCELLED_MESSAGE)?;
    out.flush()
}

/// Runs checks until the user stops.
///
/// Only terminal I/O failures are returned as errors; interrupts are reported
/// to the user and end the session with [`Outcome::Cancelled`].
pub fn run<P, W>(prompter: &mut P, out: &mut W) -> Result<Outcome, InputError>
where
    P: Prompter + ?Sized,
    W: Write,
{
    match run_checks(prompter, out) {
        Err(e) if e.is_cancellation() => {
            #[cfg(feature = "tracing")]
            tracing::info!("session cancelled: {}", e);
            write_cancelled(out)?;
            Ok(Outcome::Cancelled)
        }
        other => other,
    }
}

fn run_checks<P, W>(prompter: &mut P, out: &mut W) -> Result<Outcome, InputError>
where
    P: Prompter + ?Sized,
    W: Write,
{
    loop {
        let password = read_password(prompter, out, PASSWORD_PROMPT)?;
        if password.expose_secret().is_empty() {
            writeln!(out, "No password entered. Exiting.")?;
            out.flush()?;
            return Ok(Outcome::NoPassword);
        }

        let assessment = evaluate_password_strength(&password);
        drop(password);
        print_report(&assessment, out)?;

        let answer = prompter.prompt(out, REPEAT_PROMPT, Echo::Plain)?;
        if !wants_another(&answer) {
            writeln!(out)?;
            writeln!(out, "Goodbye.")?;
            out.flush()?;
            return Ok(Outcome::Declined);
        }
        writeln!(out)?;
    }
}
