//! Caller-supplied splash configuration.
//!
//! [`SplashOptions`] is what the caller fills in (builder methods carry the
//! defaults). [`SplashOptions::validate`] turns it into a [`SplashTheme`]:
//! fonts resolved to faces and colors parsed. Validation never touches the
//! image or a window, so a bad option fails before anything is opened.
//!
//! Options can also come from loosely-typed JSON through
//! [`SplashOptions::from_json`], which reports wrong types and wrong shapes
//! separately:
//!
//! ```ignore
//! let options = SplashOptions::from_json(&serde_json::json!({
//!     "image": "splash.png",
//!     "initial_status_value": "Loading...",
//!     "app_info": "Your Application v1.0.0",
//!     "app_info_font": ["helvetica", 36],
//!     "app_info_text_color": "#333333",
//! }))?;
//! ```

use std::path::PathBuf;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use serde_json::{Map, Value};

use crate::colors::parse_color;
use crate::config::{DEFAULT_APP_INFO_FONT_SIZE, DEFAULT_FONT_FAMILY, DEFAULT_STATUS_FONT_SIZE, DEFAULT_TEXT_COLOR};
use crate::error::ConfigError;
use crate::fonts::{FontSpec, label_style};

// =============================================================================
// Field Names (used in error messages and as JSON keys)
// =============================================================================

pub const IMAGE: &str = "image";
pub const INITIAL_STATUS_VALUE: &str = "initial_status_value";
pub const STATUS_FONT: &str = "status_font";
pub const STATUS_TEXT_COLOUR: &str = "status_text_colour";
pub const APP_INFO: &str = "app_info";
pub const APP_INFO_FONT: &str = "app_info_font";
pub const APP_INFO_TEXT_COLOR: &str = "app_info_text_color";

const KNOWN_FIELDS: [&str; 7] = [
    IMAGE,
    INITIAL_STATUS_VALUE,
    STATUS_FONT,
    STATUS_TEXT_COLOUR,
    APP_INFO,
    APP_INFO_FONT,
    APP_INFO_TEXT_COLOR,
];

// =============================================================================
// Image Source
// =============================================================================

/// Where the splash image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image file on disk; the format is guessed from its contents.
    Path(PathBuf),
    /// An encoded image already in memory.
    Bytes(Vec<u8>),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self { Self::Path(path) }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self { Self::Path(PathBuf::from(path)) }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self { Self::Bytes(bytes) }
}

// =============================================================================
// Options
// =============================================================================

/// Splash configuration, immutable once the splash is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashOptions {
    pub image: ImageSource,
    pub initial_status_value: String,
    pub status_font: FontSpec,
    pub status_text_colour: String,
    pub app_info: String,
    pub app_info_font: FontSpec,
    pub app_info_text_color: String,
}

impl SplashOptions {
    /// Options for `image` with every other field at its default.
    pub fn new(image: impl Into<ImageSource>) -> Self {
        Self {
            image: image.into(),
            initial_status_value: String::new(),
            status_font: FontSpec::new(DEFAULT_FONT_FAMILY, DEFAULT_STATUS_FONT_SIZE),
            status_text_colour: DEFAULT_TEXT_COLOR.to_owned(),
            app_info: String::new(),
            app_info_font: FontSpec::new(DEFAULT_FONT_FAMILY, DEFAULT_APP_INFO_FONT_SIZE),
            app_info_text_color: DEFAULT_TEXT_COLOR.to_owned(),
        }
    }

    #[must_use]
    pub fn initial_status_value(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.initial_status_value = text.into();
        self
    }

    #[must_use]
    pub fn status_font(
        mut self,
        family: impl Into<String>,
        size: u32,
    ) -> Self {
        self.status_font = FontSpec::new(family, size);
        self
    }

    #[must_use]
    pub fn status_text_colour(
        mut self,
        color: impl Into<String>,
    ) -> Self {
        self.status_text_colour = color.into();
        self
    }

    #[must_use]
    pub fn app_info(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.app_info = text.into();
        self
    }

    #[must_use]
    pub fn app_info_font(
        mut self,
        family: impl Into<String>,
        size: u32,
    ) -> Self {
        self.app_info_font = FontSpec::new(family, size);
        self
    }

    #[must_use]
    pub fn app_info_text_color(
        mut self,
        color: impl Into<String>,
    ) -> Self {
        self.app_info_text_color = color.into();
        self
    }

    /// Resolve fonts and parse colors. Fields are checked in declaration order
    /// and the first bad one is reported.
    pub fn validate(&self) -> Result<SplashTheme, ConfigError> {
        let status_font = self.status_font.resolve(STATUS_FONT)?;
        let status_color = parse_color(STATUS_TEXT_COLOUR, &self.status_text_colour)?;
        let app_info_font = self.app_info_font.resolve(APP_INFO_FONT)?;
        let app_info_color = parse_color(APP_INFO_TEXT_COLOR, &self.app_info_text_color)?;

        Ok(SplashTheme {
            app_info: self.app_info.clone(),
            app_info_style: label_style(app_info_font, app_info_color),
            status_style: label_style(status_font, status_color),
        })
    }

    /// Build options from a JSON object.
    ///
    /// `image` is required and is a path. Every other key is optional and
    /// falls back to its default. Wrong JSON types are type errors; fonts
    /// that are not exactly `[family, size]`, sizes that do not fit, and
    /// unknown keys are value errors.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let Value::Object(map) = value else {
            return Err(ConfigError::type_error("options", "an object", json_type_name(value)));
        };

        if let Some(unknown) = map.keys().find(|key| !KNOWN_FIELDS.contains(&key.as_str())) {
            return Err(ConfigError::value_error(unknown.as_str(), "is not a splash option", value_text(&map[unknown])));
        }

        let image = match map.get(IMAGE) {
            Some(v) => PathBuf::from(expect_str(IMAGE, v)?),
            None => return Err(ConfigError::value_error(IMAGE, "is required", "nothing")),
        };

        let mut options = Self::new(image);
        if let Some(text) = optional_str(map, INITIAL_STATUS_VALUE)? {
            options.initial_status_value = text;
        }
        if let Some(v) = map.get(STATUS_FONT) {
            options.status_font = font_from_json(STATUS_FONT, v)?;
        }
        if let Some(text) = optional_str(map, STATUS_TEXT_COLOUR)? {
            options.status_text_colour = text;
        }
        if let Some(text) = optional_str(map, APP_INFO)? {
            options.app_info = text;
        }
        if let Some(v) = map.get(APP_INFO_FONT) {
            options.app_info_font = font_from_json(APP_INFO_FONT, v)?;
        }
        if let Some(text) = optional_str(map, APP_INFO_TEXT_COLOR)? {
            options.app_info_text_color = text;
        }
        Ok(options)
    }
}

/// Validated label styles, ready for drawing.
#[derive(Debug, Clone)]
pub struct SplashTheme {
    pub app_info: String,
    pub app_info_style: MonoTextStyle<'static, Rgb888>,
    pub status_style: MonoTextStyle<'static, Rgb888>,
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Type name of a JSON value as it appears in type error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn value_text(value: &Value) -> String { value.to_string() }

fn expect_str<'v>(
    field: &str,
    value: &'v Value,
) -> Result<&'v str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::type_error(field, "a string", json_type_name(value)))
}

fn optional_str(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    map.get(field).map(|v| expect_str(field, v).map(str::to_owned)).transpose()
}

fn font_from_json(
    field: &str,
    value: &Value,
) -> Result<FontSpec, ConfigError> {
    let Value::Array(items) = value else {
        return Err(ConfigError::type_error(field, "a [font, size] pair", json_type_name(value)));
    };
    let [family, size] = items.as_slice() else {
        return Err(ConfigError::value_error(field, "should only contain (font_as_str, size_as_int)", value_text(value)));
    };
    let family = family
        .as_str()
        .ok_or_else(|| ConfigError::type_error(field, "a string font name", json_type_name(family)))?;
    if size.as_i64().is_some_and(i64::is_negative) {
        return Err(ConfigError::value_error(field, "needs a positive font size", value_text(value)));
    }
    let size = size
        .as_u64()
        .ok_or_else(|| ConfigError::type_error(field, "an integer font size", json_type_name(size)))?;
    let size = u32::try_from(size)
        .map_err(|_| ConfigError::value_error(field, "font size must be at most 64", value_text(value)))?;

    Ok(FontSpec::new(family, size))
}
