//===========================================================================//

macro_rules! invalid_data {
    ($e:expr) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         $e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidData,
                                         format!($fmt, $($arg)+)))
    };
}

macro_rules! invalid_input {
    ($e:expr) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidInput,
                                         $e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidInput,
                                         format!($fmt, $($arg)+)))
    };
}

macro_rules! not_found {
    ($e:expr) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::NotFound, $e))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err(::std::io::Error::new(::std::io::ErrorKind::NotFound,
                                         format!($fmt, $($arg)+)))
    };
}

//===========================================================================//

// Generates the `Icon` enum and the legacy code table from a single list, so
// that the two can never disagree.  The raw value of each icon is its glyph
// followed by its primary name; every name and alias becomes an `fa-` code.
macro_rules! define_icons {
    ($($variant:ident => $glyph:literal, $name:literal
       $(, $alias:literal)*;)+) => {
        /// A FontAwesome icon.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
        pub enum Icon {
            $(
                #[doc = concat!("The `fa-", $name, "` icon.")]
                $variant,
            )+
        }

        impl Icon {
            /// Every icon in the set, in table order.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)+];

            /// Returns the raw value of this icon: the glyph character
            /// followed by the icon's primary name.
            pub fn raw_value(self) -> &'static str {
                match self {
                    $(Icon::$variant => concat!($glyph, $name),)+
                }
            }

            /// Returns the primary name of this icon, without the `fa-`
            /// prefix.
            pub fn name(self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)+
                }
            }
        }

        pub(crate) static CODES: &[(&str, &str)] = &[
            $(
                (concat!("fa-", $name), concat!($glyph, $name)),
                $((concat!("fa-", $alias), concat!($glyph, $name)),)*
            )+
        ];
    };
}

//===========================================================================//
