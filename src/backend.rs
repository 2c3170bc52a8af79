//! Window backend abstraction.
//!
//! The splash widget needs very little from a windowing system: the screen
//! size, one undecorated always-on-top window at a fixed position, a way to
//! show a finished frame, and the events that arrive while it waits. Keeping
//! that behind [`Backend`] lets the lifecycle run against a recording fake in
//! tests; [`SdlBackend`](crate::sdl::SdlBackend) is the real one.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use splash_common::WindowGeometry;

use crate::error::Result;

/// In-memory frame the widget paints into before presenting it.
pub type Frame = SimulatorDisplay<Rgb888>;

/// Events the owning loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window manager or the user asked the application to quit.
    CloseRequested,
    /// The window contents were lost and must be repainted.
    Exposed,
}

pub trait Backend {
    /// Size of the primary screen in pixels.
    fn screen_size(&mut self) -> Result<Size>;

    /// Open the splash window: frameless, always on top, not resizable,
    /// at exactly `geometry`.
    fn open_window(
        &mut self,
        title: &str,
        geometry: WindowGeometry,
    ) -> Result<()>;

    /// Copy `frame` to the window and show it.
    fn present(
        &mut self,
        frame: &Frame,
    ) -> Result<()>;

    /// Wait up to `timeout` for events and return everything pending.
    fn wait_events(
        &mut self,
        timeout: Duration,
    ) -> Vec<WindowEvent>;

    /// Destroy the window and release its resources.
    fn destroy_window(&mut self);
}

/// Pack a frame into tightly packed RGB24 rows.
pub fn frame_to_rgb24(frame: &Frame) -> Vec<u8> {
    let size = frame.size();
    let mut bytes = Vec::with_capacity((size.width * size.height * 3) as usize);
    for point in frame.bounding_box().points() {
        let color = frame.get_pixel(point);
        bytes.extend_from_slice(&[color.r(), color.g(), color.b()]);
    }
    bytes
}
