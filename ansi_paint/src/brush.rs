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

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{Paint, RESET, Style, sizing::InlineString};

/// A [Brush] lets you colorize strings directly. It holds the escape code of the
/// [Style] it was made from, and nothing else, so it is cheap to clone and safe to
/// share between threads.
///
/// - [Brush::paint] returns `code + text + reset` as a [String].
/// - [Brush::apply] returns a [PaintedText] which writes the same thing when it is
///   displayed, without allocating.
/// - [Brush::into_fn] turns it into a plain closure.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_paint::*;
///
/// // Default brushes are available for your convenience.
/// println!("This is {}", red().paint("red"));
///
/// // Or you can create new ones.
/// let weird = new_brush(Paint::Purple, Paint::Cyan);
/// println!("This color is {}", weird.apply("weird"));
///
/// // Or use one anywhere a `Fn(&str) -> String` is expected.
/// let shout = yellow().into_fn();
/// let painted: Vec<String> = ["a", "b"].into_iter().map(shout).collect();
/// assert_eq!(painted[0], "\x1b[1;33ma\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brush {
    code: InlineString,
}

/// Text and the [Brush] to paint it with. Nothing is formatted until it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedText<'a> {
    pub brush: &'a Brush,
    pub text: &'a str,
}

mod brush_impl {
    use super::{Brush, InlineString, PaintedText};

    impl Brush {
        #[must_use]
        pub(crate) fn new(code: InlineString) -> Self { Self { code } }

        /// The escape code written in front of the text.
        #[must_use]
        pub fn code(&self) -> &str { &self.code }

        #[must_use]
        pub fn paint(&self, text: &str) -> String { self.apply(text).to_string() }

        #[must_use]
        pub fn apply<'a>(&'a self, text: &'a str) -> PaintedText<'a> {
            PaintedText { brush: self, text }
        }

        /// Moves this brush into a closure, for APIs that take a function.
        pub fn into_fn(self) -> impl Fn(&str) -> String + Clone + Send + Sync + 'static {
            move |text: &str| self.paint(text)
        }
    }
}

mod painted_text_impl {
    use super::{PaintedText, SmallString};

    impl PaintedText<'_> {
        pub fn println(&self) {
            println!("{self}");
        }

        pub fn eprintln(&self) {
            eprintln!("{self}");
        }

        /// This is different than the [std::fmt::Display] trait implementation, because
        /// it doesn't allocate a new [String], but instead allocates an inline buffer on
        /// the stack. If this buffer gets larger than
        /// [crate::sizing::DEFAULT_STRING_STORAGE_SIZE], it will spill to the heap.
        #[must_use]
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; crate::sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            use std::fmt::Write as _;

            let mut acc = SmallString::new();
            _ = write!(acc, "{self}");
            acc
        }
    }
}

mod display_trait_impl {
    use super::{Display, Formatter, PaintedText, RESET, Result};

    impl Display for PaintedText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.brush.code)?;
            write!(f, "{}", self.text)?;
            write!(f, "{RESET}")?;
            Ok(())
        }
    }
}

impl From<&Style> for Brush {
    fn from(style: &Style) -> Self { style.brush() }
}

impl From<Style> for Brush {
    fn from(style: Style) -> Self { style.brush() }
}

/// Gives you a brush that you can invoke directly to create colorized strings. Same as
/// `Style::new(background, foreground).brush()`.
#[must_use]
pub fn new_brush(background: impl Into<Option<Paint>>, foreground: Paint) -> Brush {
    Style::new(background, foreground).brush()
}

// Monochrome.

/// Black text on a white background.
#[must_use]
pub fn black() -> Brush { new_brush(Paint::White, Paint::Black) }

/// White text on a dark gray background.
#[must_use]
pub fn white() -> Brush { new_brush(Paint::DarkGray, Paint::White) }

#[must_use]
pub fn light_gray() -> Brush { new_brush(None, Paint::LightGray) }

// Bright colors, on the terminal's own background.

#[must_use]
pub fn blue() -> Brush { new_brush(None, Paint::Blue) }

#[must_use]
pub fn cyan() -> Brush { new_brush(None, Paint::Cyan) }

#[must_use]
pub fn green() -> Brush { new_brush(None, Paint::Green) }

#[must_use]
pub fn purple() -> Brush { new_brush(None, Paint::Purple) }

#[must_use]
pub fn red() -> Brush { new_brush(None, Paint::Red) }

#[must_use]
pub fn yellow() -> Brush { new_brush(None, Paint::Yellow) }

// Dark colors, on the terminal's own background.

#[must_use]
pub fn dark_blue() -> Brush { new_brush(None, Paint::DarkBlue) }

#[must_use]
pub fn dark_cyan() -> Brush { new_brush(None, Paint::DarkCyan) }

#[must_use]
pub fn dark_gray() -> Brush { new_brush(None, Paint::DarkGray) }

#[must_use]
pub fn dark_green() -> Brush { new_brush(None, Paint::DarkGreen) }

#[must_use]
pub fn dark_purple() -> Brush { new_brush(None, Paint::DarkPurple) }

#[must_use]
pub fn dark_red() -> Brush { new_brush(None, Paint::DarkRed) }

/// Shows up as brown on most terminals.
#[must_use]
pub fn dark_yellow() -> Brush { new_brush(None, Paint::DarkYellow) }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Brush, black, dark_yellow, light_gray, new_brush, red, white};
    use crate::{Paint, Style};

    #[test]
    fn red_on_no_background() {
        assert_eq!(red().paint("red"), "\x1b[1;31mred\x1b[0m");
        assert_eq!(
            new_brush(None, Paint::Red).paint("red"),
            "\x1b[1;31mred\x1b[0m"
        );
    }

    #[test]
    fn black_is_black_on_white() {
        assert_eq!(black().paint("x"), "\x1b[47m\x1b[0;30mx\x1b[0m");
        assert_eq!(black(), new_brush(Paint::White, Paint::Black));
    }

    #[test_case(white(), "\x1b[40m\x1b[1;37m")]
    #[test_case(light_gray(), "\x1b[0;37m")]
    #[test_case(dark_yellow(), "\x1b[0;33m")]
    fn convenience_brush_codes(brush: Brush, code: &str) {
        assert_eq!(brush.code(), code);
    }

    #[test]
    fn empty_text_is_code_then_reset() {
        assert_eq!(red().paint(""), "\x1b[1;31m\x1b[0m");
    }

    #[test]
    fn apply_matches_paint() {
        let brush = new_brush(Paint::Purple, Paint::Cyan);
        let painted = brush.apply("weird");
        assert_eq!(painted.to_string(), brush.paint("weird"));
        assert_eq!(painted.to_small_str().as_str(), brush.paint("weird"));
    }

    #[test]
    fn into_fn_can_be_called_repeatedly() {
        let paint = red().into_fn();
        assert_eq!(paint("a"), "\x1b[1;31ma\x1b[0m");
        assert_eq!(paint("b"), "\x1b[1;31mb\x1b[0m");
    }

    #[test]
    fn brush_from_style() {
        let style = Style::new(Paint::Red, Paint::Yellow);
        assert_eq!(Brush::from(&style), style.brush());
        assert_eq!(Brush::from(style.clone()).code(), style.code());
        assert_eq!(style.paint("hi"), "\x1b[41m\x1b[1;33mhi\x1b[0m");
    }

    #[test]
    fn brush_is_shareable_across_threads() {
        let brush = std::sync::Arc::new(red());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let brush = brush.clone();
                std::thread::spawn(move || brush.paint(&i.to_string()))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("\x1b[1;31m{i}\x1b[0m"));
        }
    }
}
