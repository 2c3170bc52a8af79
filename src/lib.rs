//! Splash screen for desktop applications.
//!
//! A borderless, centered, always-on-top window a third of the screen in size,
//! showing an image in up to three stacked bands: the application info on top,
//! a plain filler band when there is room, and a live status line at the
//! bottom. The window closes itself once the caller sets the close flag.
//!
//! - [`SplashScreen`]: the widget and its owning event loop
//! - [`SplashHandle`]: marshals status text and close requests from worker threads
//! - [`Backend`]: window system seam, implemented by [`SdlBackend`]
//!
//! Options, layout, colors, fonts and rendering live in [`splash_common`] and
//! are re-exported here.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod backend;
pub mod error;
pub mod handle;
pub mod loader;
pub mod scheduler;
pub mod sdl;
pub mod splash;
pub mod timing;

pub use backend::{Backend, Frame, WindowEvent};
pub use error::{Result, SplashError};
pub use handle::{Command, SplashHandle};
pub use sdl::SdlBackend;
pub use splash::SplashScreen;
pub use splash_common::{
    ConfigError,
    FontSpec,
    ImageSource,
    Layout,
    Region,
    RegionKind,
    SessionState,
    SplashOptions,
    WindowGeometry,
};
