// Entrypoint for the passchecker CLI.
// No flags: the session prompts for everything it needs.

use std::io::{self, Write};

use anyhow::Context;
use passchecker::{run, TerminalPrompter};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    // Restores the terminal if the process is signalled mid-prompt.
    #[cfg(unix)]
    passchecker::install_signal_handlers().context("failed to install signal handlers")?;

    // Unlocked handle: the signal thread must be able to write too.
    let mut out = io::stdout();

    let outcome = run(&mut TerminalPrompter, &mut out)
        .context("failed to read from the terminal (is stdin a TTY?)")?;

    #[cfg(feature = "tracing")]
    tracing::info!(?outcome, "session finished");
    #[cfg(not(feature = "tracing"))]
    let _ = outcome;

    out.flush()?;
    Ok(())
}
