//! SDL2 window backend.
//!
//! The splash window is created borderless and always on top at a fixed
//! position; SDL windows are not resizable unless asked to be. Frames are
//! uploaded as RGB24 into a streaming texture that is stretched over the
//! whole window.

use std::time::Duration;

use embedded_graphics::prelude::*;
use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::Canvas;
use sdl2::sys::SDL_WindowFlags;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use splash_common::WindowGeometry;
use tracing::debug;

use crate::backend::{Backend, Frame, WindowEvent, frame_to_rgb24};
use crate::error::{Result, SplashError};

pub struct SdlBackend {
    _context: Sdl,
    video: VideoSubsystem,
    events: EventPump,
    canvas: Option<Canvas<Window>>,
}

impl SdlBackend {
    /// Initialise SDL and its video subsystem. Must run on the main thread on
    /// most platforms.
    pub fn new() -> Result<Self> {
        let context = sdl2::init().map_err(SplashError::Display)?;
        let video = context.video().map_err(SplashError::Display)?;
        let events = context.event_pump().map_err(SplashError::Display)?;
        Ok(Self { _context: context, video, events, canvas: None })
    }
}

impl Backend for SdlBackend {
    fn screen_size(&mut self) -> Result<Size> {
        let mode = self.video.desktop_display_mode(0).map_err(SplashError::Display)?;
        Ok(Size::new(mode.w.max(0) as u32, mode.h.max(0) as u32))
    }

    fn open_window(
        &mut self,
        title: &str,
        geometry: WindowGeometry,
    ) -> Result<()> {
        let mut builder = self.video.window(title, geometry.width, geometry.height);
        // set_window_flags replaces the flag set, so it goes before borderless()
        builder
            .set_window_flags(SDL_WindowFlags::SDL_WINDOW_ALWAYS_ON_TOP as u32)
            .borderless()
            .position(geometry.x, geometry.y);

        let window = builder.build().map_err(SplashError::display)?;
        let mut canvas = window.into_canvas().build().map_err(SplashError::display)?;
        canvas.window_mut().raise();
        debug!(?geometry, "sdl window created");
        self.canvas = Some(canvas);
        Ok(())
    }

    fn present(
        &mut self,
        frame: &Frame,
    ) -> Result<()> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(());
        };

        let size = frame.size();
        let creator = canvas.texture_creator();
        let mut texture = creator
            .create_texture_streaming(PixelFormatEnum::RGB24, size.width, size.height)
            .map_err(SplashError::display)?;
        texture
            .update(None, &frame_to_rgb24(frame), size.width as usize * 3)
            .map_err(SplashError::display)?;

        canvas.copy(&texture, None, None).map_err(SplashError::Display)?;
        canvas.present();
        Ok(())
    }

    fn wait_events(
        &mut self,
        timeout: Duration,
    ) -> Vec<WindowEvent> {
        let mut pending = Vec::new();
        let first = self.events.wait_event_timeout(timeout.as_millis().min(u128::from(u32::MAX)) as u32);

        for event in first.into_iter().chain(self.events.poll_iter()) {
            match event {
                Event::Quit { .. } | Event::Window { win_event: SdlWindowEvent::Close, .. } => {
                    pending.push(WindowEvent::CloseRequested);
                }
                Event::Window { win_event: SdlWindowEvent::Exposed, .. } => pending.push(WindowEvent::Exposed),
                _ => {}
            }
        }
        pending
    }

    fn destroy_window(&mut self) {
        // Dropping the canvas drops the window, which destroys it
        if self.canvas.take().is_some() {
            debug!("sdl window destroyed");
        }
    }
}
