//! Cross-thread handle for the splash.
//!
//! The splash window and its state belong to the owning thread. Worker
//! threads never touch them; they send a [`Command`] through a
//! [`SplashHandle`] and the owning loop applies it on its next pass.

use crossbeam_channel::Sender;

use crate::error::{Result, SplashError};

/// A value marshalled back to the owning loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the status text and repaint the status region.
    SetStatus(String),
    /// Assign the close flag.
    SetClose(bool),
}

/// Cloneable, `Send` handle to a splash owned by another thread.
#[derive(Debug, Clone)]
pub struct SplashHandle {
    tx: Sender<Command>,
}

impl SplashHandle {
    pub(crate) const fn new(tx: Sender<Command>) -> Self { Self { tx } }

    /// Queue a status text update.
    pub fn set_status(
        &self,
        text: impl Into<String>,
    ) -> Result<()> {
        self.send(Command::SetStatus(text.into()))
    }

    /// Queue an assignment of the close flag.
    pub fn set_close_splashscreen(
        &self,
        value: bool,
    ) -> Result<()> {
        self.send(Command::SetClose(value))
    }

    fn send(
        &self,
        command: Command,
    ) -> Result<()> {
        self.tx.send(command).map_err(|_| SplashError::Disconnected)
    }
}
