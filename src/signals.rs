//! Termination signal handling.
//!
//! A signal such as SIGINT or SIGTERM would kill the process without running
//! [`RawModeGuard`](crate::RawModeGuard)'s destructor, leaving the terminal in
//! raw mode. A watcher thread catches them instead, restores the terminal,
//! prints the cancellation notice and exits cleanly.

use std::io::{self, Write};
use std::os::raw::c_int;
use std::{process, thread};

use crossterm::terminal;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

use crate::session::write_cancelled;

/// Signals that end a session.
pub const TERMINATION_SIGNALS: [c_int; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Waits for the first signal from `signals`, then restores the terminal and
/// writes the cancellation notice to `out`.
///
/// Returns the signal received, or `None` if the stream ended first.
pub fn cancel_on_signal<I, W>(signals: I, out: &mut W) -> io::Result<Option<c_int>>
where
    I: IntoIterator<Item = c_int>,
    W: Write + ?Sized,
{
    let Some(signal) = signals.into_iter().next() else {
        return Ok(None);
    };

    #[cfg(feature = "tracing")]
    tracing::info!(signal, "termination signal received");

    // No-op when raw mode is not active.
    terminal::disable_raw_mode()?;
    write_cancelled(out)?;
    Ok(Some(signal))
}

/// Installs handlers for [`TERMINATION_SIGNALS`] on a background thread.
///
/// On the first signal the process exits with status 0.
pub fn install_signal_handlers() -> io::Result<()> {
    let mut signals = Signals::new(TERMINATION_SIGNALS)?;
    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            let mut out = io::stdout();
            match cancel_on_signal(signals.forever(), &mut out) {
                Ok(Some(_)) => process::exit(0),
                Ok(None) => {}
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Failed to restore terminal after signal: {}", e);
                    let _ = e;
                    process::exit(1);
                }
            }
        })?;
    Ok(())
}
