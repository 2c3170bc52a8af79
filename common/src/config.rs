//! Layout and validation constants.
//!
//! The window is always a fixed fraction of the screen and the header/footer
//! bands have a fixed height, so every layout number can be derived from the
//! screen size alone. Nothing here is recomputed after construction.

// =============================================================================
// Window Geometry
// =============================================================================

/// The splash window is `1 / SCREEN_FRACTION` of the screen in each dimension.
pub const SCREEN_FRACTION: u32 = 3;

// =============================================================================
// Region Layout
// =============================================================================

/// Height of the app-info header and of the status footer when the window is
/// tall enough for a filler band between them.
pub const HEADER_HEIGHT: u32 = 80;

/// Window heights above this get three regions (header, filler, footer).
/// At or below it the window is split in two halves instead.
pub const FILLER_THRESHOLD: u32 = 2 * HEADER_HEIGHT;

// =============================================================================
// Validation Limits
// =============================================================================

/// Largest accepted font size. Sizes above this are a value error.
pub const MAX_FONT_SIZE: u32 = 64;

// =============================================================================
// Defaults
// =============================================================================

/// Default family for both text labels.
pub const DEFAULT_FONT_FAMILY: &str = "helvetica";

/// Default status line font size.
pub const DEFAULT_STATUS_FONT_SIZE: u32 = 18;

/// Default app-info header font size.
pub const DEFAULT_APP_INFO_FONT_SIZE: u32 = 36;

/// Default color for both text labels.
pub const DEFAULT_TEXT_COLOR: &str = "black";
