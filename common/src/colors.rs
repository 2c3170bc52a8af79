//! Text colors for the splash labels.
//!
//! Colors arrive as text, the way a caller would write them in a stylesheet:
//! one of the CSS color names or a `#rgb` / `#rrggbb` hex triplet.
//!
//! # Rgb888 Color Format
//!
//! The desktop frame is 24-bit, 8 bits per channel, so parsed colors are
//! returned as `Rgb888` and need no conversion before being uploaded.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::error::ConfigError;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

pub const BLACK: Rgb888 = Rgb888::BLACK;
pub const WHITE: Rgb888 = Rgb888::WHITE;
pub const RED: Rgb888 = Rgb888::RED;
pub const GREEN: Rgb888 = Rgb888::GREEN;
pub const BLUE: Rgb888 = Rgb888::BLUE;
pub const YELLOW: Rgb888 = Rgb888::YELLOW;
pub const CYAN: Rgb888 = Rgb888::CYAN;
pub const MAGENTA: Rgb888 = Rgb888::MAGENTA;

// =============================================================================
// Named Colors
// =============================================================================

/// Mid gray (`#808080`).
pub const GRAY: Rgb888 = Rgb888::new(128, 128, 128);

/// Orange (`#ffa500`).
pub const ORANGE: Rgb888 = Rgb888::new(255, 165, 0);

/// CSS color names accepted by [`parse_color`], sorted for binary search.
/// Lookups are case-insensitive and ignore spaces, so `"Dark Blue"` works.
const NAMED_COLORS: [(&str, Rgb888); 148] = [
    ("aliceblue", Rgb888::new(240, 248, 255)),
    ("antiquewhite", Rgb888::new(250, 235, 215)),
    ("aqua", Rgb888::new(0, 255, 255)),
    ("aquamarine", Rgb888::new(127, 255, 212)),
    ("azure", Rgb888::new(240, 255, 255)),
    ("beige", Rgb888::new(245, 245, 220)),
    ("bisque", Rgb888::new(255, 228, 196)),
    ("black", BLACK),
    ("blanchedalmond", Rgb888::new(255, 235, 205)),
    ("blue", BLUE),
    ("blueviolet", Rgb888::new(138, 43, 226)),
    ("brown", Rgb888::new(165, 42, 42)),
    ("burlywood", Rgb888::new(222, 184, 135)),
    ("cadetblue", Rgb888::new(95, 158, 160)),
    ("chartreuse", Rgb888::new(127, 255, 0)),
    ("chocolate", Rgb888::new(210, 105, 30)),
    ("coral", Rgb888::new(255, 127, 80)),
    ("cornflowerblue", Rgb888::new(100, 149, 237)),
    ("cornsilk", Rgb888::new(255, 248, 220)),
    ("crimson", Rgb888::new(220, 20, 60)),
    ("cyan", CYAN),
    ("darkblue", Rgb888::new(0, 0, 139)),
    ("darkcyan", Rgb888::new(0, 139, 139)),
    ("darkgoldenrod", Rgb888::new(184, 134, 11)),
    ("darkgray", Rgb888::new(169, 169, 169)),
    ("darkgreen", Rgb888::new(0, 100, 0)),
    ("darkgrey", Rgb888::new(169, 169, 169)),
    ("darkkhaki", Rgb888::new(189, 183, 107)),
    ("darkmagenta", Rgb888::new(139, 0, 139)),
    ("darkolivegreen", Rgb888::new(85, 107, 47)),
    ("darkorange", Rgb888::new(255, 140, 0)),
    ("darkorchid", Rgb888::new(153, 50, 204)),
    ("darkred", Rgb888::new(139, 0, 0)),
    ("darksalmon", Rgb888::new(233, 150, 122)),
    ("darkseagreen", Rgb888::new(143, 188, 143)),
    ("darkslateblue", Rgb888::new(72, 61, 139)),
    ("darkslategray", Rgb888::new(47, 79, 79)),
    ("darkslategrey", Rgb888::new(47, 79, 79)),
    ("darkturquoise", Rgb888::new(0, 206, 209)),
    ("darkviolet", Rgb888::new(148, 0, 211)),
    ("deeppink", Rgb888::new(255, 20, 147)),
    ("deepskyblue", Rgb888::new(0, 191, 255)),
    ("dimgray", Rgb888::new(105, 105, 105)),
    ("dimgrey", Rgb888::new(105, 105, 105)),
    ("dodgerblue", Rgb888::new(30, 144, 255)),
    ("firebrick", Rgb888::new(178, 34, 34)),
    ("floralwhite", Rgb888::new(255, 250, 240)),
    ("forestgreen", Rgb888::new(34, 139, 34)),
    ("fuchsia", Rgb888::new(255, 0, 255)),
    ("gainsboro", Rgb888::new(220, 220, 220)),
    ("ghostwhite", Rgb888::new(248, 248, 255)),
    ("gold", Rgb888::new(255, 215, 0)),
    ("goldenrod", Rgb888::new(218, 165, 32)),
    ("gray", GRAY),
    ("green", Rgb888::new(0, 128, 0)),
    ("greenyellow", Rgb888::new(173, 255, 47)),
    ("grey", GRAY),
    ("honeydew", Rgb888::new(240, 255, 240)),
    ("hotpink", Rgb888::new(255, 105, 180)),
    ("indianred", Rgb888::new(205, 92, 92)),
    ("indigo", Rgb888::new(75, 0, 130)),
    ("ivory", Rgb888::new(255, 255, 240)),
    ("khaki", Rgb888::new(240, 230, 140)),
    ("lavender", Rgb888::new(230, 230, 250)),
    ("lavenderblush", Rgb888::new(255, 240, 245)),
    ("lawngreen", Rgb888::new(124, 252, 0)),
    ("lemonchiffon", Rgb888::new(255, 250, 205)),
    ("lightblue", Rgb888::new(173, 216, 230)),
    ("lightcoral", Rgb888::new(240, 128, 128)),
    ("lightcyan", Rgb888::new(224, 255, 255)),
    ("lightgoldenrodyellow", Rgb888::new(250, 250, 210)),
    ("lightgray", Rgb888::new(211, 211, 211)),
    ("lightgreen", Rgb888::new(144, 238, 144)),
    ("lightgrey", Rgb888::new(211, 211, 211)),
    ("lightpink", Rgb888::new(255, 182, 193)),
    ("lightsalmon", Rgb888::new(255, 160, 122)),
    ("lightseagreen", Rgb888::new(32, 178, 170)),
    ("lightskyblue", Rgb888::new(135, 206, 250)),
    ("lightslategray", Rgb888::new(119, 136, 153)),
    ("lightslategrey", Rgb888::new(119, 136, 153)),
    ("lightsteelblue", Rgb888::new(176, 196, 222)),
    ("lightyellow", Rgb888::new(255, 255, 224)),
    ("lime", GREEN),
    ("limegreen", Rgb888::new(50, 205, 50)),
    ("linen", Rgb888::new(250, 240, 230)),
    ("magenta", MAGENTA),
    ("maroon", Rgb888::new(128, 0, 0)),
    ("mediumaquamarine", Rgb888::new(102, 205, 170)),
    ("mediumblue", Rgb888::new(0, 0, 205)),
    ("mediumorchid", Rgb888::new(186, 85, 211)),
    ("mediumpurple", Rgb888::new(147, 112, 219)),
    ("mediumseagreen", Rgb888::new(60, 179, 113)),
    ("mediumslateblue", Rgb888::new(123, 104, 238)),
    ("mediumspringgreen", Rgb888::new(0, 250, 154)),
    ("mediumturquoise", Rgb888::new(72, 209, 204)),
    ("mediumvioletred", Rgb888::new(199, 21, 133)),
    ("midnightblue", Rgb888::new(25, 25, 112)),
    ("mintcream", Rgb888::new(245, 255, 250)),
    ("mistyrose", Rgb888::new(255, 228, 225)),
    ("moccasin", Rgb888::new(255, 228, 181)),
    ("navajowhite", Rgb888::new(255, 222, 173)),
    ("navy", Rgb888::new(0, 0, 128)),
    ("oldlace", Rgb888::new(253, 245, 230)),
    ("olive", Rgb888::new(128, 128, 0)),
    ("olivedrab", Rgb888::new(107, 142, 35)),
    ("orange", ORANGE),
    ("orangered", Rgb888::new(255, 69, 0)),
    ("orchid", Rgb888::new(218, 112, 214)),
    ("palegoldenrod", Rgb888::new(238, 232, 170)),
    ("palegreen", Rgb888::new(152, 251, 152)),
    ("paleturquoise", Rgb888::new(175, 238, 238)),
    ("palevioletred", Rgb888::new(219, 112, 147)),
    ("papayawhip", Rgb888::new(255, 239, 213)),
    ("peachpuff", Rgb888::new(255, 218, 185)),
    ("peru", Rgb888::new(205, 133, 63)),
    ("pink", Rgb888::new(255, 192, 203)),
    ("plum", Rgb888::new(221, 160, 221)),
    ("powderblue", Rgb888::new(176, 224, 230)),
    ("purple", Rgb888::new(128, 0, 128)),
    ("rebeccapurple", Rgb888::new(102, 51, 153)),
    ("red", RED),
    ("rosybrown", Rgb888::new(188, 143, 143)),
    ("royalblue", Rgb888::new(65, 105, 225)),
    ("saddlebrown", Rgb888::new(139, 69, 19)),
    ("salmon", Rgb888::new(250, 128, 114)),
    ("sandybrown", Rgb888::new(244, 164, 96)),
    ("seagreen", Rgb888::new(46, 139, 87)),
    ("seashell", Rgb888::new(255, 245, 238)),
    ("sienna", Rgb888::new(160, 82, 45)),
    ("silver", Rgb888::new(192, 192, 192)),
    ("skyblue", Rgb888::new(135, 206, 235)),
    ("slateblue", Rgb888::new(106, 90, 205)),
    ("slategray", Rgb888::new(112, 128, 144)),
    ("slategrey", Rgb888::new(112, 128, 144)),
    ("snow", Rgb888::new(255, 250, 250)),
    ("springgreen", Rgb888::new(0, 255, 127)),
    ("steelblue", Rgb888::new(70, 130, 180)),
    ("tan", Rgb888::new(210, 180, 140)),
    ("teal", Rgb888::new(0, 128, 128)),
    ("thistle", Rgb888::new(216, 191, 216)),
    ("tomato", Rgb888::new(255, 99, 71)),
    ("turquoise", Rgb888::new(64, 224, 208)),
    ("violet", Rgb888::new(238, 130, 238)),
    ("wheat", Rgb888::new(245, 222, 179)),
    ("white", WHITE),
    ("whitesmoke", Rgb888::new(245, 245, 245)),
    ("yellow", YELLOW),
    ("yellowgreen", Rgb888::new(154, 205, 50)),
];

/// Parse a color name or hex triplet.
///
/// `field` only names the option in the error message.
pub fn parse_color(
    field: &str,
    text: &str,
) -> Result<Rgb888, ConfigError> {
    let trimmed = text.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ConfigError::value_error(field, "is not a valid hex color", text));
    }

    let key: String = trimmed.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_lowercase()).collect();
    NAMED_COLORS
        .binary_search_by(|(name, _)| (*name).cmp(key.as_str()))
        .map(|i| NAMED_COLORS[i].1)
        .map_err(|_| ConfigError::value_error(field, "is not a known color name", text))
}

fn parse_hex(hex: &str) -> Option<Rgb888> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // #rgb expands each nibble: #3af == #33aaff
        3 => {
            let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb888::new(channels.next()??, channels.next()??, channels.next()??))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb888::new(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}
