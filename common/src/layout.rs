//! Window geometry and region layout.
//!
//! The window is a third of the screen in each dimension, centered. Its height
//! is split into stacked full-width regions:
//!
//! ```text
//!  height > 160                 height <= 160
//! +---------------------+      +---------------------+
//! | app info     (80)   |      | app info   (h / 2)  |
//! +---------------------+      +---------------------+
//! | filler (h - 160)    |      | status (h - h / 2)  |
//! +---------------------+      +---------------------+
//! | status       (80)   |
//! +---------------------+
//! ```
//!
//! Regions tile the window exactly: each starts where the previous one ends
//! and the last one ends at the window height.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::config::{FILLER_THRESHOLD, HEADER_HEIGHT, SCREEN_FRACTION};

// =============================================================================
// Window Geometry
// =============================================================================

/// Size and top-left position of the splash window on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    /// A window a third of `screen` in each dimension, centered on it.
    pub const fn centered_on(screen: Size) -> Self {
        let width = screen.width / SCREEN_FRACTION;
        let height = screen.height / SCREEN_FRACTION;
        Self {
            x: ((screen.width - width) / 2) as i32,
            y: ((screen.height - height) / 2) as i32,
            width,
            height,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
}

// =============================================================================
// Regions
// =============================================================================

/// What a region shows on top of its image crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Header with the application name/version.
    AppInfo,
    /// Plain image band between header and footer.
    Filler,
    /// Footer bound to the status text.
    Status,
}

/// A full-width horizontal band of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    /// First row of the band.
    pub top: u32,
    pub height: u32,
}

impl Region {
    /// One past the last row of the band.
    #[inline]
    pub const fn bottom(&self) -> u32 { self.top + self.height }

    /// The band as a rectangle in window coordinates.
    pub const fn bounds(
        &self,
        width: u32,
    ) -> Rectangle {
        Rectangle::new(Point::new(0, self.top as i32), Size::new(width, self.height))
    }
}

/// The stacked regions of one window, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    height: u32,
    regions: Vec<Region, 3>,
}

impl Layout {
    pub fn for_window(
        width: u32,
        height: u32,
    ) -> Self {
        let mut regions = Vec::new();

        if height > FILLER_THRESHOLD {
            regions.extend([
                Region { kind: RegionKind::AppInfo, top: 0, height: HEADER_HEIGHT },
                Region { kind: RegionKind::Filler, top: HEADER_HEIGHT, height: height - 2 * HEADER_HEIGHT },
                Region { kind: RegionKind::Status, top: height - HEADER_HEIGHT, height: HEADER_HEIGHT },
            ]);
        } else {
            let header = height / 2;
            regions.extend([
                Region { kind: RegionKind::AppInfo, top: 0, height: header },
                Region { kind: RegionKind::Status, top: header, height: height - header },
            ]);
        }

        Self { width, height, regions }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn regions(&self) -> &[Region] { &self.regions }

    #[inline]
    pub fn has_filler(&self) -> bool { self.region(RegionKind::Filler).is_some() }

    pub fn region(
        &self,
        kind: RegionKind,
    ) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(layout: &Layout) {
        let mut next_top = 0;
        for region in layout.regions() {
            assert_eq!(region.top, next_top, "{:?} leaves a gap or overlaps", region.kind);
            next_top = region.bottom();
        }
        assert_eq!(next_top, layout.height(), "regions must end at the window height");
    }

    // -------------------------------------------------------------------------
    // Window Geometry
    // -------------------------------------------------------------------------

    #[test]
    fn test_geometry_full_hd() {
        let g = WindowGeometry::centered_on(Size::new(1920, 1080));
        assert_eq!(g, WindowGeometry { x: 640, y: 360, width: 640, height: 360 });
    }

    #[test]
    fn test_geometry_floors_odd_sizes() {
        // 1366 / 3 = 455.33, (1366 - 455) / 2 = 455.5
        // 769 / 3 = 256.33, (769 - 256) / 2 = 256.5
        let g = WindowGeometry::centered_on(Size::new(1366, 769));
        assert_eq!(g, WindowGeometry { x: 455, y: 256, width: 455, height: 256 });
    }

    #[test]
    fn test_geometry_many_screens() {
        for (w, h) in [(800, 600), (1280, 1024), (2560, 1440), (3840, 2160), (1001, 487)] {
            let g = WindowGeometry::centered_on(Size::new(w, h));
            assert_eq!(g.width, w / 3);
            assert_eq!(g.height, h / 3);
            assert_eq!(g.x, ((w - w / 3) / 2) as i32);
            assert_eq!(g.y, ((h - h / 3) / 2) as i32);
        }
    }

    #[test]
    fn test_geometry_tiny_screen_is_empty() {
        assert!(WindowGeometry::centered_on(Size::new(2, 900)).is_empty());
        assert!(!WindowGeometry::centered_on(Size::new(3, 3)).is_empty());
    }

    // -------------------------------------------------------------------------
    // Region Layout
    // -------------------------------------------------------------------------

    #[test]
    fn test_three_regions_above_threshold() {
        let layout = Layout::for_window(640, 360);
        let heights: std::vec::Vec<_> = layout.regions().iter().map(|r| (r.kind, r.height)).collect();
        assert_eq!(
            heights,
            [(RegionKind::AppInfo, 80), (RegionKind::Filler, 200), (RegionKind::Status, 80)]
        );
        assert!(layout.has_filler());
        assert_tiles(&layout);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = Layout::for_window(100, 160);
        assert!(!at.has_filler(), "160 is not above the threshold");
        assert_eq!(at.regions().len(), 2);

        let above = Layout::for_window(100, 161);
        assert!(above.has_filler());
        assert_eq!(above.region(RegionKind::Filler).map(|r| r.height), Some(1));
    }

    #[test]
    fn test_two_regions_odd_height() {
        let layout = Layout::for_window(200, 151);
        let regions = layout.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], Region { kind: RegionKind::AppInfo, top: 0, height: 75 });
        assert_eq!(regions[1], Region { kind: RegionKind::Status, top: 75, height: 76 });
        assert_tiles(&layout);
    }

    #[test]
    fn test_every_height_tiles() {
        for height in 0..=400 {
            let layout = Layout::for_window(10, height);
            assert_tiles(&layout);
            let expected = if height > 160 { 3 } else { 2 };
            assert_eq!(layout.regions().len(), expected, "height {height}");
        }
    }

    #[test]
    fn test_region_bounds() {
        let layout = Layout::for_window(640, 360);
        let status = layout.region(RegionKind::Status).unwrap();
        assert_eq!(status.bounds(640), Rectangle::new(Point::new(0, 280), Size::new(640, 80)));
    }
}
