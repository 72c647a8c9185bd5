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

use smallvec::smallvec;

use crate::{Brush, Paint, SgrCode,
            sizing::{InlineString, InlineVecSgrCodes}};

/// [Style] will give you colorized strings. Styles are immutable.
///
/// - `bg` - the background [Paint], or [None] to leave the terminal's background alone.
/// - `fg` - the foreground [Paint].
/// - `code` - the escape code computed from `bg` and `fg`. It is computed once, when the
///   [Style] is created, and is never edited after that.
///
/// To "change" a [Style] use [Style::with_background] or [Style::with_foreground]. They
/// return a new [Style], and leave the original unchanged.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_paint::*;
///
/// let red_bg = Style::new(Paint::Red, Paint::Yellow);
/// let green_fg = red_bg.with_foreground(Paint::Green);
///
/// assert_eq!(red_bg.foreground(), Paint::Yellow);
/// assert_eq!(green_fg.foreground(), Paint::Green);
///
/// let green = green_fg.brush();
/// println!("This is {} but not really", green.paint("kind of green"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    bg: Option<Paint>,
    fg: Paint,
    code: InlineString,
}

pub mod sizing {
    use smallstr::SmallString;
    use smallvec::SmallVec;

    use crate::SgrCode;

    /// A background segment (`\x1b[4Xm`) and a foreground segment (`\x1b[X;3Xm`) is 12
    /// bytes, so the code for any [crate::Style] fits without spilling to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

    /// At most one background and one foreground segment.
    pub const MAX_SGR_CODES_PER_STYLE: usize = 2;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODES_PER_STYLE]>;
}

mod style_impl {
    use super::{Brush, InlineVecSgrCodes, Paint, Style, compute_color_code, sgr_codes};

    impl Style {
        /// Gives you a style ready to produce strings with the given background and
        /// foreground paints. Pass [None] as the `background` to keep the terminal's
        /// background.
        #[must_use]
        pub fn new(background: impl Into<Option<Paint>>, foreground: Paint) -> Self {
            let bg = background.into();
            let fg = foreground;
            Self {
                bg,
                fg,
                code: compute_color_code(bg, fg),
            }
        }

        /// Copies the current style and returns a new [Style] that has the desired
        /// background. The original is unchanged.
        #[must_use]
        pub fn with_background(&self, background: impl Into<Option<Paint>>) -> Self {
            Self::new(background, self.fg)
        }

        /// Copies the current style and returns a new [Style] that has the desired
        /// foreground. The original is unchanged.
        #[must_use]
        pub fn with_foreground(&self, foreground: Paint) -> Self {
            Self::new(self.bg, foreground)
        }

        #[must_use]
        pub fn background(&self) -> Option<Paint> { self.bg }

        #[must_use]
        pub fn foreground(&self) -> Paint { self.fg }

        /// The escape code that goes in front of the text, without the trailing reset.
        #[must_use]
        pub fn code(&self) -> &str { &self.code }

        #[must_use]
        pub fn sgr_codes(&self) -> InlineVecSgrCodes { sgr_codes(self.bg, self.fg) }

        /// A [Brush] that can be used to color things directly, eg:
        ///
        /// ```rust
        /// use r3bl_ansi_paint::*;
        ///
        /// let red = Style::new(Paint::Black, Paint::Red).brush();
        /// println!("This is {}", red.paint("red"));
        /// ```
        #[must_use]
        pub fn brush(&self) -> Brush { Brush::new(self.code.clone()) }

        /// Shorthand for `self.brush().paint(text)`.
        #[must_use]
        pub fn paint(&self, text: &str) -> String { self.brush().paint(text) }
    }
}

/// The background segment, if there is one, always comes before the foreground segment.
fn sgr_codes(bg: Option<Paint>, fg: Paint) -> InlineVecSgrCodes {
    match bg {
        None => smallvec![SgrCode::foreground(fg)],
        Some(bg) => smallvec![SgrCode::background(bg), SgrCode::foreground(fg)],
    }
}

fn compute_color_code(bg: Option<Paint>, fg: Paint) -> InlineString {
    use std::fmt::Write as _;

    let mut acc = InlineString::new();
    for it in sgr_codes(bg, fg) {
        // Writing into an in memory buffer can't fail.
        _ = write!(acc, "{it}");
    }
    acc
}
