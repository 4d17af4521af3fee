//! Color values and CSS color parsing.
//!
//! Styled text only needs four numbers from a color: red, green and blue
//! channels in `0..=255` and an alpha in `0.0..=1.0`. The [`Rgba`] trait
//! captures exactly that, so any color model can feed [`StyledText::color`].
//! [`Color`] is the concrete value stored in the tree.
//!
//! # Parsing
//!
//! [`Color`] implements [`FromStr`] for CSS color text, which is what themes
//! use in their YAML and JSON files:
//!
//! ```rust
//! use styled_html::Color;
//!
//! let teal: Color = "#008080".parse().unwrap();
//! assert_eq!(teal, Color::rgb(0, 128, 128));
//!
//! let faded: Color = "rgba(255, 0, 0, 0.5)".parse().unwrap();
//! assert_eq!(faded.to_css(), "rgba(255, 0, 0, 0.5)");
//! ```
//!
//! [`StyledText::color`]: crate::StyledText::color

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use cssparser::{ParseError, Parser, ParserInput, Token};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Channel accessors for anything that can be used as a text color.
pub trait Rgba {
    /// Red channel, `0..=255`.
    fn red(&self) -> u8;
    /// Green channel, `0..=255`.
    fn green(&self) -> u8;
    /// Blue channel, `0..=255`.
    fn blue(&self) -> u8;
    /// Opacity, `0.0..=1.0`.
    fn alpha(&self) -> f64;
}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

/// Error returned when a string is not a color this crate understands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{value}'")]
pub struct ColorParseError {
    /// The rejected input.
    pub value: String,
}

impl Color {
    /// Opaque black, the color of unstyled text.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0.0,
    };

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Creates a color with the given opacity.
    ///
    /// Alpha is clamped to `0.0..=1.0`; NaN is treated as opaque.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Copies the channels out of any [`Rgba`] value.
    pub fn from_rgba<C: Rgba + ?Sized>(color: &C) -> Self {
        Self::rgba(color.red(), color.green(), color.blue(), color.alpha())
    }

    /// Renders the color as a CSS `rgba(r, g, b, a)` function.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Returns the nearest index in the ANSI 256-color palette.
    ///
    /// Grays map onto the 24-step grayscale ramp, everything else onto the
    /// 6x6x6 color cube. Alpha is ignored.
    ///
    /// ```rust
    /// use styled_html::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).to_ansi256(), 196);
    /// assert_eq!(Color::rgb(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (self.red, self.green, self.blue);
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    fn from_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let (red, green, blue, alpha) = match digits.len() {
            3 | 4 => {
                let alpha = if digits.len() == 4 { nibble(3)? * 17 } else { 255 };
                (nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, alpha)
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
                (byte(0)?, byte(2)?, byte(4)?, alpha)
            }
            _ => return None,
        };
        Some(Self::rgba(red, green, blue, round_alpha(alpha as f64 / 255.0)))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba for Color {
    fn red(&self) -> u8 {
        self.red
    }

    fn green(&self) -> u8 {
        self.green
    }

    fn blue(&self) -> u8 {
        self.blue
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Rgba for (u8, u8, u8) {
    fn red(&self) -> u8 {
        self.0
    }

    fn green(&self) -> u8 {
        self.1
    }

    fn blue(&self) -> u8 {
        self.2
    }

    fn alpha(&self) -> f64 {
        1.0
    }
}

impl Rgba for (u8, u8, u8, f64) {
    fn red(&self) -> u8 {
        self.0
    }

    fn green(&self) -> u8 {
        self.1
    }

    fn blue(&self) -> u8 {
        self.2
    }

    fn alpha(&self) -> f64 {
        self.3
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(|p| parse_css_color(p))
            .map_err(|_| ColorParseError {
                value: s.to_string(),
            })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

static NAMED_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("transparent", Color::TRANSPARENT),
        ("red", Color::rgb(255, 0, 0)),
        ("green", Color::rgb(0, 128, 0)),
        ("lime", Color::rgb(0, 255, 0)),
        ("blue", Color::rgb(0, 0, 255)),
        ("yellow", Color::rgb(255, 255, 0)),
        ("orange", Color::rgb(255, 165, 0)),
        ("purple", Color::rgb(128, 0, 128)),
        ("fuchsia", Color::rgb(255, 0, 255)),
        ("magenta", Color::rgb(255, 0, 255)),
        ("aqua", Color::rgb(0, 255, 255)),
        ("cyan", Color::rgb(0, 255, 255)),
        ("teal", Color::rgb(0, 128, 128)),
        ("navy", Color::rgb(0, 0, 128)),
        ("maroon", Color::rgb(128, 0, 0)),
        ("olive", Color::rgb(128, 128, 0)),
        ("silver", Color::rgb(192, 192, 192)),
        ("gray", Color::rgb(128, 128, 128)),
        ("grey", Color::rgb(128, 128, 128)),
    ])
});

fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
}

// CSS only needs alpha to three decimals; f32 tokens would otherwise leak
// digits like 0.800000011920929 into the rendered declaration.
fn round_alpha(alpha: f64) -> f64 {
    (alpha * 1000.0).round() / 1000.0
}

fn parse_css_color<'i>(parser: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match token {
        Token::Hash(ref digits) | Token::IDHash(ref digits) => {
            Color::from_hex(digits).ok_or_else(|| location.new_custom_error(()))
        }
        Token::Ident(ref name) => named_color(name).ok_or_else(|| location.new_custom_error(())),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|arguments| parse_rgb_arguments(arguments))
        }
        ref other => Err(location.new_unexpected_token_error(other.clone())),
    }
}

fn parse_rgb_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let red = parse_channel(parser)?;
    parser.expect_comma()?;
    let green = parse_channel(parser)?;
    parser.expect_comma()?;
    let blue = parse_channel(parser)?;
    let alpha = if parser.try_parse(|p| p.expect_comma()).is_ok() {
        parse_alpha(parser)?
    } else {
        1.0
    };
    Ok(Color::rgba(red, green, blue, alpha))
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    let scaled = match *parser.next()? {
        Token::Number { value, .. } => value,
        Token::Percentage { unit_value, .. } => unit_value * 255.0,
        ref other => return Err(location.new_unexpected_token_error(other.clone())),
    };
    Ok(scaled.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> Result<f64, ParseError<'i, ()>> {
    let location = parser.current_source_location();
    let alpha = match *parser.next()? {
        Token::Number { value, .. } | Token::Percentage {
            unit_value: value, ..
        } => value,
        ref other => return Err(location.new_unexpected_token_error(other.clone())),
    };
    Ok(round_alpha(f64::from(alpha).clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_natural_decimals() {
        assert_eq!(Color::rgb(255, 0, 0).to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Color::rgba(1, 2, 3, 0.25).to_css(), "rgba(1, 2, 3, 0.25)");
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        assert_eq!(Color::rgba(0, 0, 0, 3.0).alpha(), 1.0);
        assert_eq!(Color::rgba(0, 0, 0, -1.0).alpha(), 0.0);
        assert_eq!(Color::rgba(0, 0, 0, f64::NAN).alpha(), 1.0);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#336699".parse::<Color>().unwrap(), Color::rgb(51, 102, 153));
        assert_eq!(
            "#00000080".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 0.502)
        );
        assert_eq!("#0000".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(
            "rgb(10, 20, 30)".parse::<Color>().unwrap(),
            Color::rgb(10, 20, 30)
        );
        assert_eq!(
            "RGBA(255, 255, 255, 0.8)".parse::<Color>().unwrap(),
            Color::rgba(255, 255, 255, 0.8)
        );
        assert_eq!(
            "rgb(100%, 0%, 50%)".parse::<Color>().unwrap(),
            Color::rgb(255, 0, 128)
        );
        assert_eq!(
            "rgba(0, 0, 0, 50%)".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 0.5)
        );
    }

    #[test]
    fn test_parse_channels_clamp() {
        assert_eq!(
            "rgb(300, -5, 0)".parse::<Color>().unwrap(),
            Color::rgb(255, 0, 0)
        );
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("Teal".parse::<Color>().unwrap(), Color::rgb(0, 128, 128));
        assert_eq!(" grey ".parse::<Color>().unwrap(), Color::rgb(128, 128, 128));
        assert_eq!("transparent".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "#12", "#ggg", "chartreuse-ish", "rgb(1, 2)", "red blue", "hsl(0, 0%, 0%)"] {
            let err = input.parse::<Color>().unwrap_err();
            assert_eq!(err.value, input);
        }
    }

    #[test]
    fn test_rgba_trait_for_tuples() {
        assert_eq!(Color::from_rgba(&(1, 2, 3)), Color::rgb(1, 2, 3));
        assert_eq!(Color::from_rgba(&(1, 2, 3, 0.5)), Color::rgba(1, 2, 3, 0.5));
    }

    #[test]
    fn test_to_ansi256() {
        assert_eq!(Color::BLACK.to_ansi256(), 16);
        assert_eq!(Color::WHITE.to_ansi256(), 231);
        assert_eq!(Color::rgb(0, 0, 255).to_ansi256(), 21);
        assert!((232..=255).contains(&Color::rgb(128, 128, 128).to_ansi256()));
    }

    #[test]
    fn test_serde_round_trip_through_css_text() {
        let json = serde_json::to_string(&Color::rgba(1, 2, 3, 0.5)).unwrap();
        assert_eq!(json, r#""rgba(1, 2, 3, 0.5)""#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgba(1, 2, 3, 0.5));
        assert!(serde_json::from_str::<Color>(r#""nope""#).is_err());
    }
}
