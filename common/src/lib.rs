//! Platform-agnostic core of the splash screen.
//!
//! This crate contains everything that does not need a real window:
//!
//! - [`colors`]: text color parsing (`"black"`, `"#333333"`, ...)
//! - [`config`]: layout and validation constants
//! - [`error`]: type and value errors raised by validation
//! - [`fonts`]: `(family, size)` font descriptors and their bitmap faces
//! - [`options`]: caller-supplied configuration with defaults and JSON input
//! - [`layout`]: window geometry and the stacked region layout
//! - [`state`]: close flag, status text cell and the session state machine
//! - [`render`]: drawing regions onto any `DrawTarget<Color = Rgb888>`
//!
//! The desktop window, the scheduler and the event loop live in the
//! `splashscreen` crate.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod options;
pub mod render;
pub mod state;

// Re-export commonly used items
pub use error::ConfigError;
pub use fonts::FontSpec;
pub use layout::{Layout, Region, RegionKind, WindowGeometry};
pub use options::{ImageSource, SplashOptions, SplashTheme};
pub use render::RenderState;
pub use state::{CloseFlag, SessionState, StatusText, Tick};
