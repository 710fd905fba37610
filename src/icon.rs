use crate::table::CODES;
pub use crate::table::Icon;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

//===========================================================================//

// FontAwesome 4.x places every glyph in this slice of the private use area.
pub(crate) const FIRST_CODE_POINT: u32 = 0xf000;
pub(crate) const LAST_CODE_POINT: u32 = 0xf2ff;

//===========================================================================//

impl Icon {
    /// Returns the character that the FontAwesome font renders as this icon.
    pub fn glyph(self) -> char {
        let glyph = glyph_of_raw_value(self.raw_value());
        debug_assert!(
            (FIRST_CODE_POINT..=LAST_CODE_POINT).contains(&(glyph as u32)),
            "Raw value of {:?} does not start with a FontAwesome glyph",
            self
        );
        glyph
    }

    /// Returns the Unicode code point of this icon's glyph.
    pub fn code_point(self) -> u32 {
        self.glyph() as u32
    }

    /// Returns a one-character string that will appear as this icon when
    /// drawn with the FontAwesome font.
    pub fn glyph_string(self) -> String {
        self.glyph().to_string()
    }

    /// Returns the primary legacy code for this icon (e.g. `"fa-glass"`).
    pub fn code(self) -> String {
        format!("fa-{}", self.name())
    }

    /// Looks up the icon whose raw value is `raw`.
    pub fn from_raw_value(raw: &str) -> Option<Icon> {
        raw_values().get(raw).copied()
    }

    /// Looks up an icon by its primary name or any of its aliases, with or
    /// without the `fa-` prefix.
    pub fn from_name(name: &str) -> Option<Icon> {
        if name.starts_with("fa-") {
            icon_for_code(name)
        } else {
            icon_for_code(&format!("fa-{}", name))
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.glyph())
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(name: &str) -> Result<Icon, UnknownIcon> {
        Icon::from_name(name).ok_or_else(|| UnknownIcon(name.to_string()))
    }
}

//===========================================================================//

/// The error returned when parsing an unknown icon name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownIcon(pub String);

impl fmt::Display for UnknownIcon {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Unknown FontAwesome icon: {:?}", self.0)
    }
}

impl std::error::Error for UnknownIcon {}

//===========================================================================//

/// Returns a string that will appear as `icon` when drawn with the
/// FontAwesome font.
pub fn glyph_string(icon: Icon) -> String {
    icon.glyph_string()
}

/// Returns a string that will appear as the icon with the given legacy CSS
/// code (e.g. `"fa-github"`), or `None` if the code is unknown.
pub fn glyph_string_for_code(code: &str) -> Option<String> {
    icon_for_code(code).map(Icon::glyph_string)
}

/// Returns the icon with the given legacy CSS code, or `None` if the code is
/// unknown.
pub fn icon_for_code(code: &str) -> Option<Icon> {
    let raw = code_table().get(code)?;
    Icon::from_raw_value(raw)
}

/// Returns an iterator over every legacy code and the icon it names.
/// Aliases appear alongside primary codes.
pub fn codes() -> impl Iterator<Item = (&'static str, Icon)> {
    CODES.iter().filter_map(|&(code, raw)| {
        Icon::from_raw_value(raw).map(|icon| (code, icon))
    })
}

//===========================================================================//

fn glyph_of_raw_value(raw: &str) -> char {
    raw.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn code_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> =
        OnceLock::new();
    TABLE.get_or_init(|| CODES.iter().copied().collect())
}

fn raw_values() -> &'static HashMap<&'static str, Icon> {
    static TABLE: OnceLock<HashMap<&'static str, Icon>> = OnceLock::new();
    TABLE.get_or_init(|| {
        Icon::ALL.iter().map(|&icon| (icon.raw_value(), icon)).collect()
    })
}

//===========================================================================//


//===========================================================================//
