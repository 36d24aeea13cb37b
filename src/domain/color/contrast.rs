// SPDX-License-Identifier: MPL-2.0
//! Readable text color selection for color swatches.
//!
//! Brightness uses the YIQ luma weights:
//!
//! ```text
//! Y = (299 * r + 587 * g + 114 * b) / 1000
//! ```
//!
//! A swatch is *light* when `Y > 128`. Light swatches get dark gray text and a
//! hairline border so they stay visible on a light page; dark swatches get
//! white text and no border.
//!
//! # Malformed input
//!
//! Hex strings are not validated. Each channel reads the leading hex digits
//! of its two-character slot, so `"FG"` reads as `0x0F`. A slot with no
//! leading hex digit leaves the brightness undefined, and an undefined
//! brightness never compares greater than the threshold, so such input lands
//! in the *dark* branch.
//!
//! # Example
//!
//! ```
//! use evergreen_storefront::domain::color::SwatchContrast;
//!
//! let white = SwatchContrast::for_hex("#FFFFFF");
//! assert!(white.is_light);
//! assert_eq!(white.text_color, "#374151");
//!
//! let garbage = SwatchContrast::for_hex("not-a-color");
//! assert!(!garbage.is_light);
//! assert_eq!(garbage.text_color, "#FFFFFF");
//! ```

/// Text color used on light swatches (dark gray).
pub const TEXT_ON_LIGHT: &str = "#374151";

/// Text color used on dark swatches.
pub const TEXT_ON_DARK: &str = "#FFFFFF";

/// Brightness above which a swatch counts as light. The comparison is strict.
pub const LIGHT_THRESHOLD: f64 = 128.0;

/// Contrast decision for a single swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchContrast {
    /// YIQ brightness, `None` when the hex string could not be parsed.
    pub brightness: Option<f64>,
    pub is_light: bool,
    pub text_color: &'static str,
    /// Whether a light hairline border should be drawn around the swatch.
    pub has_border: bool,
}

impl SwatchContrast {
    #[must_use]
    pub fn for_hex(hex: &str) -> Self {
        let brightness = parse_rgb(hex).map(|(r, g, b)| yiq_brightness(r, g, b));
        let is_light = brightness.is_some_and(|y| y > LIGHT_THRESHOLD);

        Self {
            brightness,
            is_light,
            text_color: if is_light { TEXT_ON_LIGHT } else { TEXT_ON_DARK },
            has_border: is_light,
        }
    }
}

/// Parses `#RRGGBB` or `RRGGBB` into channels.
///
/// Only the first six characters after the optional `#` are read; trailing
/// characters are ignored. Slots are clipped to the input, and within a slot
/// leading whitespace is skipped and parsing stops at the first non-hex
/// character. A slot yielding no digit makes the whole color unparsable.
#[must_use]
pub fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    Some((
        parse_channel(digits, 0)?,
        parse_channel(digits, 2)?,
        parse_channel(digits, 4)?,
    ))
}

fn parse_channel(digits: &str, start: usize) -> Option<u8> {
    let end = (start + 2).min(digits.len());
    let slot = digits.get(start.min(end)..end)?.trim_start();
    let len = slot.bytes().take_while(u8::is_ascii_hexdigit).count();
    u8::from_str_radix(&slot[..len], 16).ok()
}

#[must_use]
pub fn yiq_brightness(r: u8, g: u8, b: u8) -> f64 {
    (299.0 * f64::from(r) + 587.0 * f64::from(g) + 114.0 * f64::from(b)) / 1000.0
}
