/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! The 16 color palette that every ANSI terminal understands.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use strum_macros::{Display, EnumCount, EnumIter};

/// The "intensity" half of a [Paint]. This is the `0` or `1` that comes before the `;`
/// in a foreground code like `1;31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Intensity {
    Normal,
    Bright,
}

/// The "hue" half of a [Paint]. Its [Hue::offset] is added to `30` for foreground codes
/// and to `40` for background codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

/// A color to paint with, either as a foreground or a background paint.
///
/// The first 8 are normal intensity (`0;30` to `0;37`), the last 8 are bright intensity
/// (`1;30` to `1;37`). Use `Option<Paint>` where "no background override" is needed,
/// eg: [crate::Style::new].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Paint {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkPurple,
    DarkCyan,
    LightGray,

    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

mod intensity_impl {
    use super::Intensity;

    impl Intensity {
        /// The digit that goes before the `;` in a foreground code.
        #[must_use]
        pub fn code(self) -> u8 {
            match self {
                Intensity::Normal => 0,
                Intensity::Bright => 1,
            }
        }

        #[must_use]
        pub fn from_code(code: u8) -> Option<Self> {
            match code {
                0 => Some(Intensity::Normal),
                1 => Some(Intensity::Bright),
                _ => None,
            }
        }
    }
}

mod hue_impl {
    use super::Hue;

    impl Hue {
        /// Offset from black, in the range `0..=7`.
        #[rustfmt::skip]
        #[must_use]
        pub fn offset(self) -> u8 {
            match self {
                Hue::Black  => 0,
                Hue::Red    => 1,
                Hue::Green  => 2,
                Hue::Yellow => 3,
                Hue::Blue   => 4,
                Hue::Purple => 5,
                Hue::Cyan   => 6,
                Hue::White  => 7,
            }
        }

        #[rustfmt::skip]
        #[must_use]
        pub fn from_offset(offset: u8) -> Option<Self> {
            match offset {
                0 => Some(Hue::Black),
                1 => Some(Hue::Red),
                2 => Some(Hue::Green),
                3 => Some(Hue::Yellow),
                4 => Some(Hue::Blue),
                5 => Some(Hue::Purple),
                6 => Some(Hue::Cyan),
                7 => Some(Hue::White),
                _ => None,
            }
        }
    }
}

mod paint_impl {
    use super::{Hue, Intensity, Paint};

    impl Paint {
        #[rustfmt::skip]
        #[must_use]
        pub fn intensity(self) -> Intensity {
            match self {
                Paint::Black    | Paint::DarkRed    | Paint::DarkGreen | Paint::DarkYellow
                | Paint::DarkBlue | Paint::DarkPurple | Paint::DarkCyan  | Paint::LightGray
                    => Intensity::Normal,
                Paint::DarkGray | Paint::Red        | Paint::Green     | Paint::Yellow
                | Paint::Blue     | Paint::Purple     | Paint::Cyan      | Paint::White
                    => Intensity::Bright,
            }
        }

        #[rustfmt::skip]
        #[must_use]
        pub fn hue(self) -> Hue {
            match self {
                Paint::Black      | Paint::DarkGray => Hue::Black,
                Paint::DarkRed    | Paint::Red      => Hue::Red,
                Paint::DarkGreen  | Paint::Green    => Hue::Green,
                Paint::DarkYellow | Paint::Yellow   => Hue::Yellow,
                Paint::DarkBlue   | Paint::Blue     => Hue::Blue,
                Paint::DarkPurple | Paint::Purple   => Hue::Purple,
                Paint::DarkCyan   | Paint::Cyan     => Hue::Cyan,
                Paint::LightGray  | Paint::White    => Hue::White,
            }
        }

        /// Inverse of [Paint::intensity] and [Paint::hue].
        #[rustfmt::skip]
        #[must_use]
        pub fn from_parts(intensity: Intensity, hue: Hue) -> Self {
            match (intensity, hue) {
                (Intensity::Normal, Hue::Black)  => Paint::Black,
                (Intensity::Normal, Hue::Red)    => Paint::DarkRed,
                (Intensity::Normal, Hue::Green)  => Paint::DarkGreen,
                (Intensity::Normal, Hue::Yellow) => Paint::DarkYellow,
                (Intensity::Normal, Hue::Blue)   => Paint::DarkBlue,
                (Intensity::Normal, Hue::Purple) => Paint::DarkPurple,
                (Intensity::Normal, Hue::Cyan)   => Paint::DarkCyan,
                (Intensity::Normal, Hue::White)  => Paint::LightGray,
                (Intensity::Bright, Hue::Black)  => Paint::DarkGray,
                (Intensity::Bright, Hue::Red)    => Paint::Red,
                (Intensity::Bright, Hue::Green)  => Paint::Green,
                (Intensity::Bright, Hue::Yellow) => Paint::Yellow,
                (Intensity::Bright, Hue::Blue)   => Paint::Blue,
                (Intensity::Bright, Hue::Purple) => Paint::Purple,
                (Intensity::Bright, Hue::Cyan)   => Paint::Cyan,
                (Intensity::Bright, Hue::White)  => Paint::White,
            }
        }
    }
}

/// Parsing a [Paint] from untyped text. This is the only fallible way to get a [Paint].
mod parse_paint_impl {
    use std::str::FromStr;

    use smallstr::SmallString;
    use strum::IntoEnumIterator;

    use super::{Hue, Intensity, Paint};
    use crate::{PaintError, sizing::InlineString};

    /// Lowercase, and drop `_`, `-` and spaces, so that `DarkRed`, `dark_red` and
    /// `dark-red` all compare equal.
    fn normalize(name: &str) -> InlineString {
        let mut acc = SmallString::new();
        for ch in name.trim().chars() {
            if !matches!(ch, '_' | '-' | ' ') {
                acc.push(ch.to_ascii_lowercase());
            }
        }
        acc
    }

    impl FromStr for Paint {
        type Err = PaintError;

        fn from_str(name: &str) -> Result<Self, Self::Err> {
            let needle = normalize(name);
            match Paint::iter().find(|it| normalize(&it.to_string()) == needle) {
                Some(it) => Ok(it),
                None => {
                    tracing::debug!(name, "unknown paint name");
                    Err(PaintError::UnknownColor {
                        name: name.to_string(),
                    })
                }
            }
        }
    }

    impl Paint {
        /// Parse a two part foreground code, eg: `"1;31"` is [Paint::Red].
        ///
        /// # Errors
        ///
        /// Returns [PaintError::MalformedCode] if `code` isn't `<0|1>;<30..=37>`.
        pub fn from_code(code: &str) -> Result<Self, PaintError> {
            let malformed = || {
                tracing::debug!(code, "malformed paint code");
                PaintError::MalformedCode {
                    code: code.to_string(),
                }
            };

            let (intensity, hue) = code.trim().split_once(';').ok_or_else(malformed)?;

            // Exactly one intensity digit, and a two digit hue.
            let intensity = match intensity.as_bytes() {
                [digit @ (b'0' | b'1')] => Intensity::from_code(digit - b'0'),
                _ => None,
            }
            .ok_or_else(malformed)?;

            let hue = match hue.as_bytes() {
                [b'3', digit @ b'0'..=b'7'] => Hue::from_offset(digit - b'0'),
                _ => None,
            }
            .ok_or_else(malformed)?;

            Ok(Paint::from_parts(intensity, hue))
        }
    }
}
