/*
 *   Copyright (c) 2023-2025 R3BL LLC
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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{Hue, Intensity, Paint};

/// The only escape sequences this crate ever emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Foreground(Intensity, Hue),
    Background(Hue),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Paint, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    /// Written after every painted string so color never bleeds into what follows.
    pub const RESET: &str = "\x1b[0m";

    impl SgrCode {
        #[must_use]
        pub fn foreground(paint: Paint) -> Self {
            SgrCode::Foreground(paint.intensity(), paint.hue())
        }

        /// Only the hue of a background paint is used, its intensity is dropped.
        #[must_use]
        pub fn background(paint: Paint) -> Self { SgrCode::Background(paint.hue()) }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                      => write!(f, "{CSI}0{SGR}"),
                SgrCode::Foreground(intensity, hue) => write!(
                    f, "{CSI}{};3{}{SGR}", intensity.code(), hue.offset()
                ),
                SgrCode::Background(hue)            => write!(f, "{CSI}4{}{SGR}", hue.offset()),
            }
        }
    }
}
