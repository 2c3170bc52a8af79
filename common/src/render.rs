//! Region drawing and repaint tracking.
//!
//! Each region is the matching horizontal slice of the (already resized)
//! splash image with its label centered on top. All drawing goes through
//! `DrawTarget<Color = Rgb888>`, so the same code paints the desktop frame and
//! the in-memory displays used by tests.
//!
//! # Update Strategy
//!
//! | Region | Repaint when |
//! |--------|--------------|
//! | App info | First frame / after invalidate |
//! | Filler | First frame / after invalidate |
//! | Status | First frame / after invalidate / status revision changed |
//!
//! The header and filler never change after construction, so a status update
//! only repaints the footer band.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use image::{GenericImageView, RgbImage, imageops};

use crate::fonts::CENTERED;
use crate::layout::{Layout, Region, RegionKind};
use crate::options::SplashTheme;
use crate::state::StatusText;

// =============================================================================
// Drawing
// =============================================================================

/// Paint one region: its image crop, then its label if any.
pub fn draw_region<D>(
    display: &mut D,
    image: &RgbImage,
    width: u32,
    region: &Region,
    label: Option<(&str, MonoTextStyle<'static, Rgb888>)>,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if region.height == 0 || width == 0 {
        return;
    }

    let crop = imageops::crop_imm(image, 0, region.top, width, region.height);
    let colors = crop.pixels().map(|(_, _, p)| Rgb888::new(p[0], p[1], p[2]));
    display.fill_contiguous(&region.bounds(width), colors).ok();

    if let Some((text, style)) = label
        && !text.is_empty()
    {
        let center = Point::new((width / 2) as i32, (region.top + region.height / 2) as i32);
        Text::with_text_style(text, center, style, CENTERED).draw(display).ok();
    }
}

/// Label for a region kind; the filler has none.
fn label_for<'a>(
    kind: RegionKind,
    theme: &'a SplashTheme,
    status: &'a StatusText,
) -> Option<(&'a str, MonoTextStyle<'static, Rgb888>)> {
    match kind {
        RegionKind::AppInfo => Some((theme.app_info.as_str(), theme.app_info_style)),
        RegionKind::Filler => None,
        RegionKind::Status => Some((status.get(), theme.status_style)),
    }
}

// =============================================================================
// Repaint Tracking
// =============================================================================

/// Decides which regions need repainting on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Whole frame must be repainted (first frame or after an expose).
    full_redraw: bool,
    /// Status revision that is currently on screen.
    drawn_status: u64,
}

impl RenderState {
    pub const fn new() -> Self { Self { full_redraw: true, drawn_status: 0 } }

    /// Force a full repaint on the next frame.
    #[inline]
    pub const fn invalidate(&mut self) { self.full_redraw = true; }

    /// Whether `kind` is stale given the current status revision.
    pub const fn needs_redraw(
        &self,
        kind: RegionKind,
        status_revision: u64,
    ) -> bool {
        self.full_redraw || (matches!(kind, RegionKind::Status) && self.drawn_status != status_revision)
    }

    /// Whether anything at all is stale.
    #[inline]
    pub const fn is_dirty(
        &self,
        status_revision: u64,
    ) -> bool {
        self.needs_redraw(RegionKind::Status, status_revision)
    }

    /// Repaint every stale region and return how many were painted.
    pub fn render<D>(
        &mut self,
        display: &mut D,
        image: &RgbImage,
        layout: &Layout,
        theme: &SplashTheme,
        status: &StatusText,
    ) -> usize
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let revision = status.revision();
        let mut painted = 0;

        for region in layout.regions() {
            if self.needs_redraw(region.kind, revision) {
                draw_region(display, image, layout.width(), region, label_for(region.kind, theme, status));
                painted += 1;
            }
        }

        self.full_redraw = false;
        self.drawn_status = revision;
        painted
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use image::Rgb;

    use super::*;
    use crate::colors::WHITE;
    use crate::options::SplashOptions;

    /// Image whose red channel encodes the row, so crops can be checked.
    fn row_coded_image(
        width: u32,
        height: u32,
    ) -> RgbImage {
        RgbImage::from_fn(width, height, |_, y| Rgb([y as u8, 10, 20]))
    }

    fn theme(
        app_info: &str,
        color: &str,
    ) -> SplashTheme {
        SplashOptions::new("unused.png")
            .app_info(app_info)
            .app_info_text_color(color)
            .status_text_colour(color)
            .validate()
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Region Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_regions_reproduce_image_rows() {
        let (w, h) = (40, 200);
        let image = row_coded_image(w, h);
        let layout = Layout::for_window(w, h);
        let theme = theme("", "black");
        let status = StatusText::new("");
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(w, h));

        let painted = RenderState::new().render(&mut display, &image, &layout, &theme, &status);
        assert_eq!(painted, 3);

        // Without labels the frame is exactly the image: no gaps, no shifts
        for y in [0, 79, 80, 119, 120, 199] {
            assert_eq!(display.get_pixel(Point::new(5, y)), Rgb888::new(y as u8, 10, 20), "row {y}");
        }
    }

    #[test]
    fn test_label_drawn_in_its_region() {
        let (w, h) = (200, 100);
        let image = RgbImage::from_pixel(w, h, Rgb([0, 0, 0]));
        let layout = Layout::for_window(w, h);
        let theme = theme("App v1.0", "white");
        let status = StatusText::new("");
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(w, h));

        RenderState::new().render(&mut display, &image, &layout, &theme, &status);

        let header = layout.region(RegionKind::AppInfo).unwrap().bounds(w);
        let footer = layout.region(RegionKind::Status).unwrap().bounds(w);
        let white_in = |area: embedded_graphics::primitives::Rectangle| {
            area.points().filter(|p| display.get_pixel(*p) == WHITE).count()
        };
        assert!(white_in(header) > 0, "app info text should be painted in the header");
        assert_eq!(white_in(footer), 0, "empty status should leave the footer as image");
    }

    // -------------------------------------------------------------------------
    // Repaint Tracking
    // -------------------------------------------------------------------------

    #[test]
    fn test_status_change_repaints_footer_only() {
        let (w, h) = (60, 300);
        let image = row_coded_image(w, h);
        let layout = Layout::for_window(w, h);
        let theme = theme("App", "white");
        let mut status = StatusText::new("Loading...");
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(w, h));
        let mut render = RenderState::new();

        assert!(render.is_dirty(status.revision()));
        assert_eq!(render.render(&mut display, &image, &layout, &theme, &status), 3);
        assert!(!render.is_dirty(status.revision()));
        assert_eq!(render.render(&mut display, &image, &layout, &theme, &status), 0);

        status.set("Doing something...");
        assert!(render.needs_redraw(RegionKind::Status, status.revision()));
        assert!(!render.needs_redraw(RegionKind::AppInfo, status.revision()));
        assert_eq!(render.render(&mut display, &image, &layout, &theme, &status), 1);
    }

    #[test]
    fn test_invalidate_repaints_everything() {
        let (w, h) = (60, 120);
        let image = row_coded_image(w, h);
        let layout = Layout::for_window(w, h);
        let theme = theme("", "black");
        let status = StatusText::new("");
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(w, h));
        let mut render = RenderState::new();

        render.render(&mut display, &image, &layout, &theme, &status);
        render.invalidate();
        assert_eq!(render.render(&mut display, &image, &layout, &theme, &status), 2);
    }
}
