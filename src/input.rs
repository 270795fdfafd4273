//! Masked terminal input.
//!
//! The terminal is switched to raw mode for the duration of a single prompt
//! and restored by [`RawModeGuard`] when the prompt returns, whatever the exit
//! path. Since raw mode disables signal generation, Ctrl+C and Ctrl+D arrive
//! as keystrokes and are surfaced as [`InputError::Interrupted`] and
//! [`InputError::EndOfInput`]. Signals sent from outside are handled by the
//! `signals` module.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input interrupted")]
    Interrupted,
    #[error("end of input")]
    EndOfInput,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the user asked to stop, as opposed to the terminal failing.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, InputError::Interrupted | InputError::EndOfInput)
    }
}

/// A keystroke as far as line reading is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Interrupt,
    EndOfInput,
    Ignored,
}

/// How typed characters are echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// One `*` per character.
    Mask,
    /// Characters as typed.
    Plain,
}

/// Source of keystrokes, one at a time.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Something that can show a prompt and collect one line of input.
pub trait Prompter {
    fn prompt(&mut self, out: &mut dyn Write, prompt: &str, echo: Echo)
    -> Result<String, InputError>;
}

/// Keeps the terminal in raw mode while alive.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::trace!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to restore terminal mode: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// Keystrokes read from the controlling terminal.
pub struct TerminalKeys {
    _guard: RawModeGuard,
}

impl TerminalKeys {
    /// Puts the terminal into raw mode; it is restored when this is dropped.
    pub fn acquire() -> io::Result<Self> {
        Ok(Self {
            _guard: RawModeGuard::acquire()?,
        })
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                return Ok(decode_key(key_event));
            }
        }
    }
}

/// Maps a terminal key event to a [`Key`].
pub fn decode_key(key_event: KeyEvent) -> Key {
    if key_event.kind == KeyEventKind::Release {
        return Key::Ignored;
    }
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char('c') if ctrl => Key::Interrupt,
        KeyCode::Char('d') if ctrl => Key::EndOfInput,
        // Raw mode delivers a bare line feed as Ctrl+J and ASCII BS as Ctrl+H.
        KeyCode::Char('j') if ctrl => Key::Enter,
        KeyCode::Char('h') if ctrl => Key::Backspace,
        KeyCode::Char(_) if ctrl => Key::Ignored,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Char('\t'),
        _ => Key::Ignored,
    }
}

/// Reads one line from `source`, echoing to `out` according to `echo`.
///
/// Backspace removes the last character from the buffer and from the screen;
/// on an empty buffer it does nothing. The line is terminated by Enter, which
/// is not part of the result.
pub fn read_line<S, W>(
    source: &mut S,
    out: &mut W,
    prompt: &str,
    echo: Echo,
) -> Result<String, InputError>
where
    S: KeySource + ?Sized,
    W: Write + ?Sized,
{
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut buffer = String::new();
    loop {
        match source.next_key()? {
            Key::Enter => {
                // raw mode: no implicit carriage return
                out.write_all(b"\r\n")?;
                out.flush()?;
                return Ok(buffer);
            }
            Key::Backspace => {
                if buffer.pop().is_some() {
                    out.write_all(b"\x08 \x08")?;
                    out.flush()?;
                }
            }
            Key::Char(c) => {
                buffer.push(c);
                match echo {
                    Echo::Mask => out.write_all(b"*")?,
                    Echo::Plain => write!(out, "{c}")?,
                }
                out.flush()?;
            }
            Key::Interrupt => return Err(InputError::Interrupted),
            Key::EndOfInput => return Err(InputError::EndOfInput),
            Key::Ignored => {}
        }
    }
}

/// Prompts for a password with masked echo.
pub fn read_password<P>(
    prompter: &mut P,
    out: &mut dyn Write,
    prompt: &str,
) -> Result<SecretString, InputError>
where
    P: Prompter + ?Sized,
{
    let password = prompter.prompt(out, prompt, Echo::Mask)?;
    Ok(SecretString::new(password.into()))
}

/// Prompts on the real terminal, holding raw mode for one prompt at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(
        &mut self,
        out: &mut dyn Write,
        prompt: &str,
        echo: Echo,
    ) -> Result<String, InputError> {
        let mut keys = TerminalKeys::acquire()?;
        read_line(&mut keys, out, prompt, echo)
    }
}

/// Replays a fixed sequence of keys. Running out of keys reads as Ctrl+D.
#[cfg(test)]
pub(crate) struct ScriptedKeys {
    keys: std::collections::VecDeque<Key>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub(crate) fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Types `text` followed by Enter.
    pub(crate) fn line(text: &str) -> Vec<Key> {
        text.chars()
            .map(Key::Char)
            .chain(std::iter::once(Key::Enter))
            .collect()
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::EndOfInput))
    }
}

#[cfg(test)]
impl Prompter for ScriptedKeys {
    fn prompt(
        &mut self,
        out: &mut dyn Write,
        prompt: &str,
        echo: Echo,
    ) -> Result<String, InputError> {
        read_line(self, out, prompt, echo)
    }
}
