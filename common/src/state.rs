//! Runtime state of a splash session.
//!
//! - [`CloseFlag`]: the only way to end a session. Accepts booleans only.
//! - [`StatusText`]: the text cell bound to the status label. Every write bumps
//!   a revision so the renderer knows the label is stale.
//! - [`Session`]: the Open/Closed state machine driven by the periodic check.
//!
//! Nothing here knows about time. The owning loop decides when a check is due
//! and calls [`Session::tick`].

use serde_json::Value;

use crate::error::ConfigError;
use crate::options::json_type_name;

/// Property name used in close flag errors.
pub const CLOSE_SPLASHSCREEN: &str = "close_splashscreen";

// =============================================================================
// Close Flag
// =============================================================================

/// Boolean request to close the splash, checked on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseFlag(bool);

impl CloseFlag {
    #[inline]
    pub const fn new() -> Self { Self(false) }

    #[inline]
    pub const fn get(self) -> bool { self.0 }

    #[inline]
    pub const fn set(
        &mut self,
        value: bool,
    ) {
        self.0 = value;
    }

    /// Assign from a loosely-typed value.
    ///
    /// Only JSON booleans are accepted. Anything else is a type error and the
    /// stored value is left as it was.
    pub fn try_set(
        &mut self,
        value: &Value,
    ) -> Result<(), ConfigError> {
        match value {
            Value::Bool(b) => {
                self.0 = *b;
                Ok(())
            }
            other => Err(ConfigError::type_error(CLOSE_SPLASHSCREEN, "a boolean", json_type_name(other))),
        }
    }
}

// =============================================================================
// Status Text Cell
// =============================================================================

/// Observable status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusText {
    value: String,
    revision: u64,
}

impl StatusText {
    pub fn new(initial: impl Into<String>) -> Self { Self { value: initial.into(), revision: 0 } }

    #[inline]
    pub fn get(&self) -> &str { &self.value }

    /// Replace the text. The revision advances even if the text is unchanged,
    /// so a write always leads to a repaint.
    pub fn set(
        &mut self,
        value: impl Into<String>,
    ) {
        self.value = value.into();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Number of writes since creation.
    #[inline]
    pub const fn revision(&self) -> u64 { self.revision }
}

// =============================================================================
// Session State Machine
// =============================================================================

/// Lifecycle of one splash session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Open,
    /// Terminal. The window has been (or is being) destroyed.
    Closed,
}

/// What the owning loop must do after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still open: schedule the next check.
    Rearm,
    /// Close was requested: destroy the window now. Returned exactly once.
    Destroy,
    /// Already closed: nothing to do, do not reschedule.
    Idle,
}

/// Close flag plus the Open/Closed state it drives.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    close: CloseFlag,
    ticks: u32,
}

impl Session {
    pub const fn new() -> Self { Self { state: SessionState::Open, close: CloseFlag::new(), ticks: 0 } }

    #[inline]
    pub const fn state(&self) -> SessionState { self.state }

    #[inline]
    pub const fn is_open(&self) -> bool { matches!(self.state, SessionState::Open) }

    #[inline]
    pub const fn close_flag(&self) -> &CloseFlag { &self.close }

    #[inline]
    pub const fn close_flag_mut(&mut self) -> &mut CloseFlag { &mut self.close }

    /// Number of checks run while open.
    #[inline]
    pub const fn ticks(&self) -> u32 { self.ticks }

    /// Run one periodic check.
    pub const fn tick(&mut self) -> Tick {
        match self.state {
            SessionState::Closed => Tick::Idle,
            SessionState::Open => {
                self.ticks = self.ticks.wrapping_add(1);
                if self.close.get() {
                    self.state = SessionState::Closed;
                    Tick::Destroy
                } else {
                    Tick::Rearm
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -------------------------------------------------------------------------
    // Close Flag
    // -------------------------------------------------------------------------

    #[test]
    fn test_close_flag_default_false() {
        assert!(!CloseFlag::new().get());
        assert!(!CloseFlag::default().get());
    }

    #[test]
    fn test_close_flag_accepts_booleans() {
        let mut flag = CloseFlag::new();
        flag.try_set(&json!(true)).unwrap();
        assert!(flag.get(), "true should be observable immediately");
        flag.try_set(&json!(false)).unwrap();
        assert!(!flag.get(), "false should be observable immediately");
        flag.set(true);
        assert!(flag.get());
    }

    #[test]
    fn test_close_flag_rejects_non_booleans() {
        let incorrect = [
            json!(10),
            json!(1.0),
            json!("hello, world"),
            json!([1]),
            json!(1),
            json!({"1": "1"}),
            json!(null),
            json!("true"),
        ];

        for original in [false, true] {
            let mut flag = CloseFlag::new();
            flag.set(original);
            for value in &incorrect {
                let err = flag.try_set(value).expect_err("non-boolean must be rejected");
                assert!(err.is_type_error(), "{value} should be a type error");
                assert_eq!(err.field(), CLOSE_SPLASHSCREEN);
                assert_eq!(flag.get(), original, "failed set of {value} must not change the flag");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Status Text
    // -------------------------------------------------------------------------

    #[test]
    fn test_status_text_revision() {
        let mut status = StatusText::new("Loading...");
        assert_eq!(status.get(), "Loading...");
        assert_eq!(status.revision(), 0);

        status.set("Doing something...");
        assert_eq!(status.get(), "Doing something...");
        assert_eq!(status.revision(), 1);

        status.set("Doing something...");
        assert_eq!(status.revision(), 2, "identical writes still advance the revision");
    }

    // -------------------------------------------------------------------------
    // Session State Machine
    // -------------------------------------------------------------------------

    #[test]
    fn test_session_stays_open_without_request() {
        let mut session = Session::new();
        for _ in 0..5 {
            assert_eq!(session.tick(), Tick::Rearm);
        }
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.ticks(), 5);
    }

    #[test]
    fn test_session_destroys_once() {
        let mut session = Session::new();
        assert_eq!(session.tick(), Tick::Rearm);

        session.close_flag_mut().set(true);
        assert_eq!(session.tick(), Tick::Destroy);
        assert_eq!(session.state(), SessionState::Closed);

        // Terminal: further ticks never destroy again
        assert_eq!(session.tick(), Tick::Idle);
        assert_eq!(session.tick(), Tick::Idle);
        assert_eq!(session.ticks(), 2, "closed sessions do not count ticks");
    }

    #[test]
    fn test_session_flag_reset_before_tick_keeps_open() {
        let mut session = Session::new();
        session.close_flag_mut().set(true);
        session.close_flag_mut().set(false);
        assert_eq!(session.tick(), Tick::Rearm);
        assert!(session.is_open());
    }

    #[test]
    fn test_session_closed_ignores_flag_changes() {
        let mut session = Session::new();
        session.close_flag_mut().set(true);
        assert_eq!(session.tick(), Tick::Destroy);
        session.close_flag_mut().set(false);
        assert_eq!(session.tick(), Tick::Idle);
        assert_eq!(session.state(), SessionState::Closed);
    }
}
