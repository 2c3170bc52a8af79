//! Font descriptors and the bitmap faces they resolve to.
//!
//! A font is described the way a caller would write it: a `(family, size)`
//! pair. The frame is drawn with fixed bitmap faces, so the descriptor is
//! resolved once at construction to the tallest available face that does not
//! exceed the requested size.
//!
//! | Family | Faces |
//! |--------|-------|
//! | `mono`, `monospace`, `fixed`, `courier` | embedded-graphics ASCII (6..20 px) |
//! | anything else | `ProFont` (7..24 pt) |

use embedded_graphics::mono_font::ascii::{
    FONT_4X6,
    FONT_5X8,
    FONT_6X10,
    FONT_6X12,
    FONT_7X14,
    FONT_9X15,
    FONT_9X18,
    FONT_10X20,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::config::MAX_FONT_SIZE;
use crate::error::ConfigError;

// =============================================================================
// Face Tables (nominal size, face), ascending
// =============================================================================

const PROFONT_FACES: [(u32, &MonoFont<'static>); 7] = [
    (7, &PROFONT_7_POINT),
    (9, &PROFONT_9_POINT),
    (10, &PROFONT_10_POINT),
    (12, &PROFONT_12_POINT),
    (14, &PROFONT_14_POINT),
    (18, &PROFONT_18_POINT),
    (24, &PROFONT_24_POINT),
];

const ASCII_FACES: [(u32, &MonoFont<'static>); 8] = [
    (6, &FONT_4X6),
    (8, &FONT_5X8),
    (10, &FONT_6X10),
    (12, &FONT_6X12),
    (14, &FONT_7X14),
    (15, &FONT_9X15),
    (18, &FONT_9X18),
    (20, &FONT_10X20),
];

const MONO_FAMILIES: [&str; 4] = ["mono", "monospace", "fixed", "courier"];

/// Labels are centered in their region both ways.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font Descriptor
// =============================================================================

/// A `(family, size)` font descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: u32,
}

impl FontSpec {
    pub fn new(
        family: impl Into<String>,
        size: u32,
    ) -> Self {
        Self { family: family.into(), size }
    }

    /// Check the descriptor and pick its face.
    ///
    /// The family must be non-empty and the size in `1..=MAX_FONT_SIZE`.
    ///
    /// Faces are bitmap fonts, so the result is only an approximation:
    /// - the family only selects between the ASCII faces (`mono`, `monospace`,
    ///   `fixed`, `courier`) and ProFont (any other name, e.g. `"helvetica"`)
    /// - the size picks the tallest face not above it, so ProFont tops out at
    ///   24pt and `("helvetica", 36)` draws at 24, while ASCII tops out at 10x20
    pub fn resolve(
        &self,
        field: &str,
    ) -> Result<&'static MonoFont<'static>, ConfigError> {
        if self.family.trim().is_empty() {
            return Err(ConfigError::value_error(field, "needs a non-empty font family", self.to_string()));
        }
        if self.size == 0 {
            return Err(ConfigError::value_error(field, "needs a positive font size", self.to_string()));
        }
        if self.size > MAX_FONT_SIZE {
            return Err(ConfigError::value_error(field, "font size must be at most 64", self.to_string()));
        }
        Ok(pick_face(self.faces(), self.size))
    }

    fn faces(&self) -> &'static [(u32, &'static MonoFont<'static>)] {
        let family = self.family.trim();
        if MONO_FAMILIES.iter().any(|m| m.eq_ignore_ascii_case(family)) {
            &ASCII_FACES
        } else {
            &PROFONT_FACES
        }
    }
}

impl core::fmt::Display for FontSpec {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "({:?}, {})", self.family, self.size)
    }
}

/// Tallest face not exceeding `size`, or the smallest face if none fits.
fn pick_face(
    faces: &'static [(u32, &'static MonoFont<'static>)],
    size: u32,
) -> &'static MonoFont<'static> {
    faces
        .iter()
        .rev()
        .find(|(nominal, _)| *nominal <= size)
        .or_else(|| faces.first())
        .map_or(&PROFONT_7_POINT, |&(_, face)| face)
}

/// Build a label style from a resolved face and color.
#[inline]
pub const fn label_style(
    font: &'static MonoFont<'static>,
    color: Rgb888,
) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(font, color)
}
