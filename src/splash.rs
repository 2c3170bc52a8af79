//! The splash widget.
//!
//! A [`SplashScreen`] owns one frameless, always-on-top window centered on the
//! screen, painted as up to three stacked image bands (app info, filler,
//! status). It closes itself: a check runs every [`CHECK_INTERVAL`] on the
//! owning loop and destroys the window once the close flag is set.
//!
//! # Usage
//!
//! ```ignore
//! let mut splash = SplashScreen::new(
//!     SplashOptions::new("splash.png")
//!         .initial_status_value("Loading...")
//!         .app_info("Your Application v1.0.0"),
//! )?;
//!
//! let handle = splash.handle();
//! splash.after(Duration::from_millis(5), move |_| {
//!     std::thread::spawn(move || {
//!         handle.set_status("Doing something...").ok();
//!         do_something_slow();
//!         handle.set_close_splashscreen(true).ok();
//!     });
//! });
//! splash.mainloop()?;
//! ```
//!
//! # Threading
//!
//! Everything here runs on the thread that constructed the splash. Status
//! writes from other threads must go through a [`SplashHandle`]; the loop
//! applies them on its next pass.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use image::RgbImage;
use serde_json::Value;
use splash_common::state::Session;
use splash_common::{Layout, RenderState, SessionState, SplashOptions, SplashTheme, StatusText, Tick, WindowGeometry};
use tracing::{debug, info, trace, warn};

use crate::backend::{Backend, Frame, WindowEvent};
use crate::error::{Result, SplashError};
use crate::handle::{Command, SplashHandle};
use crate::loader::load_image;
use crate::scheduler::Scheduler;
use crate::sdl::SdlBackend;
use crate::timing::{CHECK_INTERVAL, LOOP_SLICE};

/// Window title when no app info is given. Frameless windows do not show it,
/// but task switchers and window managers do.
const DEFAULT_TITLE: &str = "Splash";

/// Work queued with [`SplashScreen::after`].
type Callback<B> = Box<dyn FnOnce(&mut SplashScreen<B>)>;

pub struct SplashScreen<B: Backend = SdlBackend> {
    backend: B,
    geometry: WindowGeometry,
    layout: Layout,
    theme: SplashTheme,
    status: StatusText,
    session: Session,

    /// Resized splash image; dropped with the window.
    image: Option<RgbImage>,
    /// Frame painted before every present; dropped with the window.
    frame: Option<Frame>,
    render: RenderState,
    /// Whether the backend window still exists.
    window_open: bool,

    scheduler: Scheduler<Callback<B>>,
    commands: Receiver<Command>,
    command_tx: Sender<Command>,
}

impl SplashScreen<SdlBackend> {
    /// Open the splash on the primary screen.
    ///
    /// Options are validated before SDL is even initialised.
    pub fn new(options: SplashOptions) -> Result<Self> {
        let theme = options.validate()?;
        Self::build(&options, theme, SdlBackend::new()?)
    }
}

impl<B: Backend + 'static> SplashScreen<B> {
    /// Open the splash through a custom backend.
    pub fn with_backend(
        options: SplashOptions,
        backend: B,
    ) -> Result<Self> {
        let theme = options.validate()?;
        Self::build(&options, theme, backend)
    }

    fn build(
        options: &SplashOptions,
        theme: SplashTheme,
        mut backend: B,
    ) -> Result<Self> {
        let screen = backend.screen_size()?;
        let geometry = WindowGeometry::centered_on(screen);
        if geometry.is_empty() {
            return Err(SplashError::ScreenTooSmall { width: screen.width, height: screen.height });
        }

        let layout = Layout::for_window(geometry.width, geometry.height);
        // A bad image fails here, before any window exists
        let image = load_image(&options.image, geometry.width, geometry.height)?;

        let title = if theme.app_info.is_empty() { DEFAULT_TITLE } else { theme.app_info.as_str() };
        backend.open_window(title, geometry)?;
        info!(
            screen_width = screen.width,
            screen_height = screen.height,
            ?geometry,
            filler = layout.has_filler(),
            "splash window opened"
        );

        let (command_tx, commands) = crossbeam_channel::unbounded();
        let mut splash = Self {
            backend,
            geometry,
            layout,
            theme,
            status: StatusText::new(options.initial_status_value.as_str()),
            session: Session::new(),
            image: Some(image),
            frame: Some(Frame::new(geometry.size())),
            render: RenderState::new(),
            window_open: true,
            scheduler: Scheduler::new(),
            commands,
            command_tx,
        };

        splash.redraw()?;
        splash.after(CHECK_INTERVAL, Self::check_close);
        Ok(splash)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Current value of the close flag.
    #[inline]
    pub const fn close_splashscreen(&self) -> bool { self.session.close_flag().get() }

    /// Request (or withdraw a request) to close at the next check.
    pub fn set_close_splashscreen(
        &mut self,
        value: bool,
    ) {
        if value && !self.close_splashscreen() {
            info!("splash close requested");
        }
        self.session.close_flag_mut().set(value);
    }

    /// Assign the close flag from a loosely-typed value. Anything but a
    /// boolean is a type error and leaves the flag unchanged.
    pub fn try_set_close_splashscreen(
        &mut self,
        value: &Value,
    ) -> Result<()> {
        let was = self.close_splashscreen();
        self.session.close_flag_mut().try_set(value)?;
        if self.close_splashscreen() && !was {
            info!("splash close requested");
        }
        Ok(())
    }

    #[inline]
    pub fn status_text(&self) -> &str { self.status.get() }

    /// Replace the status line. It is repainted by the next [`update`] or
    /// loop pass.
    ///
    /// [`update`]: Self::update
    pub fn set_status_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.status.set(text);
        debug!(status = self.status.get(), "status text set");
    }

    #[inline]
    pub const fn state(&self) -> SessionState { self.session.state() }

    #[inline]
    pub const fn geometry(&self) -> WindowGeometry { self.geometry }

    #[inline]
    pub const fn layout(&self) -> &Layout { &self.layout }

    #[inline]
    pub const fn backend(&self) -> &B { &self.backend }

    /// A handle other threads can use to send status updates or a close
    /// request to this splash. Once the splash is closed, sends fail with
    /// [`SplashError::Disconnected`].
    pub fn handle(&self) -> SplashHandle { SplashHandle::new(self.command_tx.clone()) }

    // =========================================================================
    // Loop
    // =========================================================================

    /// Run `callback` on the owning loop once `delay` has elapsed.
    ///
    /// Ignored once the splash is closed, and for delays too large to
    /// represent as an `Instant`.
    pub fn after<F>(
        &mut self,
        delay: Duration,
        callback: F,
    ) where
        F: FnOnce(&mut Self) + 'static,
    {
        if !self.session.is_open() {
            debug!("splash closed, callback dropped");
            return;
        }
        let Some(due) = Instant::now().checked_add(delay) else {
            debug!(?delay, "delay never elapses, callback dropped");
            return;
        };
        self.scheduler.schedule(due, Box::new(callback));
    }

    /// Process pending window events and marshalled commands, then repaint
    /// whatever changed. Does not run scheduled callbacks.
    pub fn update(&mut self) -> Result<()> { self.pump(Duration::ZERO) }

    /// Run until the splash is closed.
    pub fn mainloop(&mut self) -> Result<()> {
        while self.session.is_open() {
            self.run_due(Instant::now());
            if !self.session.is_open() {
                break;
            }

            let timeout = self
                .scheduler
                .next_due()
                .map_or(LOOP_SLICE, |due| due.saturating_duration_since(Instant::now()).min(LOOP_SLICE));
            self.pump(timeout)?;
        }
        info!("splash main loop finished");
        Ok(())
    }

    /// Run every callback that was due at `now`. Callbacks scheduled while
    /// running wait for the next pass.
    fn run_due(
        &mut self,
        now: Instant,
    ) {
        let due: Vec<Callback<B>> = std::iter::from_fn(|| self.scheduler.pop_due(now)).collect();
        for callback in due {
            if !self.session.is_open() {
                break;
            }
            callback(self);
        }
    }

    fn pump(
        &mut self,
        timeout: Duration,
    ) -> Result<()> {
        if !self.window_open {
            return Ok(());
        }

        for event in self.backend.wait_events(timeout) {
            match event {
                WindowEvent::CloseRequested => {
                    warn!("quit requested by the window system, closing at next check");
                    self.set_close_splashscreen(true);
                }
                WindowEvent::Exposed => self.render.invalidate(),
            }
        }

        while let Ok(command) = self.commands.try_recv() {
            debug!(?command, "applying marshalled command");
            match command {
                Command::SetStatus(text) => self.set_status_text(text),
                Command::SetClose(value) => self.set_close_splashscreen(value),
            }
        }

        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(frame), Some(image)) = (self.frame.as_mut(), self.image.as_ref()) else {
            return Ok(());
        };
        if !self.render.is_dirty(self.status.revision()) {
            return Ok(());
        }

        let painted = self.render.render(frame, image, &self.layout, &self.theme, &self.status);
        trace!(painted, "splash regions repainted");
        self.backend.present(frame)
    }

    /// Periodic close check; re-arms itself while open.
    fn check_close(&mut self) {
        match self.session.tick() {
            Tick::Rearm => {
                debug!(tick = self.session.ticks(), "close check: still open");
                self.after(CHECK_INTERVAL, Self::check_close);
            }
            Tick::Destroy => {
                self.release();
                info!(ticks = self.session.ticks(), "splash closed");
            }
            Tick::Idle => {}
        }
    }
}

impl<B: Backend> SplashScreen<B> {
    /// Destroy the window and drop everything it owned. Only the first call
    /// does anything.
    fn release(&mut self) {
        if !self.window_open {
            return;
        }
        self.window_open = false;
        self.backend.destroy_window();
        self.frame = None;
        self.image = None;
        self.scheduler.clear();
        // Dropping the receiver disconnects every handle
        self.commands = crossbeam_channel::never();
    }
}

impl<B: Backend> Drop for SplashScreen<B> {
    fn drop(&mut self) { self.release(); }
}
