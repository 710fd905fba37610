#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//===========================================================================//

/// An 8-bit RGBA color, not premultiplied.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, u8::MAX);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(u8::MAX, u8::MAX, u8::MAX, u8::MAX);

    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::new(r, g, b, u8::MAX)
    }

    /// Returns the channels in R, G, B, A order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns this color with its alpha scaled by `coverage` (0 to 255).
    pub(crate) fn with_coverage(self, coverage: u8) -> Rgba {
        let alpha = (self.a as u32 * coverage as u32 + 127) / 255;
        Rgba { a: alpha as u8, ..self }
    }

    /// Composites `self` over `dest` (source-over).
    pub(crate) fn over(self, dest: Rgba) -> Rgba {
        if self.a == u8::MAX || dest.a == 0 {
            return self;
        }
        if self.a == 0 {
            return dest;
        }
        let src_a = self.a as u32;
        let dest_a = dest.a as u32 * (255 - src_a) / 255;
        let out_a = src_a + dest_a;
        let blend = |src: u8, dst: u8| {
            ((src as u32 * src_a + dst as u32 * dest_a + out_a / 2) / out_a)
                as u8
        };
        Rgba {
            r: blend(self.r, dest.r),
            g: blend(self.g, dest.g),
            b: blend(self.b, dest.b),
            a: out_a as u8,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    fn from_str(text: &str) -> Result<Rgba, ParseColorError> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if !hex.is_ascii() {
            return Err(ParseColorError(text.to_string()));
        }
        let channel = |index: usize, width: usize| {
            let digits = &hex[(index * width)..][..width];
            u8::from_str_radix(digits, 16)
                .map(|value| if width == 1 { value * 0x11 } else { value })
                .map_err(|_| ParseColorError(text.to_string()))
        };
        match hex.len() {
            3 => Ok(Rgba::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Rgba::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Ok(Rgba::new(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => Err(ParseColorError(text.to_string())),
        }
    }
}

//===========================================================================//

/// The error returned when a color string is malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Invalid color {:?} (expected #rgb, #rrggbb or #rrggbbaa)",
            self.0
        )
    }
}

impl std::error::Error for ParseColorError {}

//===========================================================================//


//===========================================================================//
