//! Colour values and theme token resolution.
//!
//! The web frontend reads CSS custom properties at mount time and hands them
//! to [`Theme::resolve`]. Missing tokens fall back to the built-in defaults.
//! The background accepts any CSS colour the canvas understands; the wave
//! colours need their channels for alpha blending, so they must parse as
//! hex or `rgb()`/`rgba()`.

use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
use thiserror::Error;

pub const TOKEN_PRIMARY: &str = "--color-primary";
pub const TOKEN_SECONDARY: &str = "--color-secondary";
pub const TOKEN_BACKGROUND: &str = "--color-background";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour `{0}` does not start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 3, 4, 6 or 8 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
    #[error("colour `{0}` is not a valid rgb()/rgba() value")]
    BadFunction(String),
    #[error("colour `{0}` is not hex or rgb()/rgba()")]
    Unsupported(String),
}

/// 8-bit RGB with a floating point alpha, matching the canvas `rgba()` syntax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_tuple(t: (u8, u8, u8, f32)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or `rgb()`/`rgba()`.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let s = raw.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else if s.starts_with("rgb") {
            Self::from_function(s)
        } else {
            Err(ColorError::Unsupported(s.to_string()))
        }
    }

    pub fn from_hex(raw: &str) -> Result<Self, ColorError> {
        let s = raw.trim();
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ColorError::BadDigit(s.to_string()));
        let short = |i: usize| {
            let d = &digits[i..i + 1];
            channel(&format!("{d}{d}"))
        };
        let long = |i: usize| channel(&digits[i * 2..i * 2 + 2]);
        let alpha = |a: u8| a as f32 / 255.0;
        match digits.len() {
            3 => Ok(Self::new(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Ok(Self::new(short(0)?, short(1)?, short(2)?, alpha(short(3)?))),
            6 => Ok(Self::new(long(0)?, long(1)?, long(2)?, 1.0)),
            8 => Ok(Self::new(long(0)?, long(1)?, long(2)?, alpha(long(3)?))),
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }

    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` or the space form `rgb(r g b / a)`.
    fn from_function(s: &str) -> Result<Self, ColorError> {
        let bad = || ColorError::BadFunction(s.to_string());
        let args = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(bad());
        }
        let channel = |p: &str| -> Result<u8, ColorError> {
            let v = match p.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().map_err(|_| bad())? * 2.55,
                None => p.parse::<f32>().map_err(|_| bad())?,
            };
            Ok(v.clamp(0.0, 255.0).round() as u8)
        };
        let alpha = match parts.get(3).map(|p| (p.strip_suffix('%'), *p)) {
            None => 1.0,
            Some((Some(pct), _)) => pct.parse::<f32>().map_err(|_| bad())? / 100.0,
            Some((None, p)) => p.parse::<f32>().map_err(|_| bad())?,
        };
        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha.clamp(0.0, 1.0),
        ))
    }

    /// CSS `rgba(...)` string accepted by `fillStyle` and gradient stops.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A colour destined for `fillStyle`: parsed when possible, otherwise the
/// page's own CSS text passed through untouched (`hsl(...)`, `white`, ...).
#[derive(Clone, Debug, PartialEq)]
pub enum CssColor {
    Rgba(Rgba),
    Raw(String),
}

impl CssColor {
    pub fn css(&self) -> String {
        match self {
            CssColor::Rgba(c) => c.css(),
            CssColor::Raw(s) => s.clone(),
        }
    }
}

impl From<Rgba> for CssColor {
    fn from(c: Rgba) -> Self {
        CssColor::Rgba(c)
    }
}

/// The three named colours the background pulls from the page theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub background: CssColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgba::new(0x7d, 0x5a, 0xff, 1.0),
            secondary: Rgba::new(0xff, 0x5a, 0x78, 1.0),
            background: CssColor::Rgba(Rgba::new(0x05, 0x05, 0x05, 1.0)),
        }
    }
}

impl Theme {
    /// Build a theme by asking `lookup` for each token. Never fails.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            primary: resolve_rgba(&lookup, TOKEN_PRIMARY, DEFAULT_PRIMARY),
            secondary: resolve_rgba(&lookup, TOKEN_SECONDARY, DEFAULT_SECONDARY),
            background: resolve_css(&lookup, TOKEN_BACKGROUND, DEFAULT_BACKGROUND),
        }
    }
}

fn token_value(lookup: &impl Fn(&str) -> Option<String>, token: &str) -> Option<String> {
    let raw = lookup(token)?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn fallback_rgba(fallback: &str) -> Rgba {
    Rgba::parse(fallback).unwrap_or(Rgba::new(0, 0, 0, 1.0))
}

fn resolve_rgba(lookup: &impl Fn(&str) -> Option<String>, token: &str, fallback: &str) -> Rgba {
    let Some(raw) = token_value(lookup, token) else {
        log::debug!("[theme] {token} not set; using {fallback}");
        return fallback_rgba(fallback);
    };
    match Rgba::parse(&raw) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[theme] {token}: {e}; using {fallback}");
            fallback_rgba(fallback)
        }
    }
}

fn resolve_css(lookup: &impl Fn(&str) -> Option<String>, token: &str, fallback: &str) -> CssColor {
    let Some(raw) = token_value(lookup, token) else {
        log::debug!("[theme] {token} not set; using {fallback}");
        return CssColor::Rgba(fallback_rgba(fallback));
    };
    match Rgba::parse(&raw) {
        Ok(c) => CssColor::Rgba(c),
        Err(_) => CssColor::Raw(raw),
    }
}
