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

//! # r3bl_ansi_paint
//!
//! Rust crate to wrap text in the 16 classic ANSI terminal colors. There is no color
//! support detection, and no 256 color or truecolor output. If you need those, use
//! `r3bl_ansi_color` instead.
//!
//! There are three things to know about:
//! 1. [Paint] - one of 16 colors (8 normal intensity, 8 bright).
//! 2. [Style] - an immutable background and foreground pair, with its escape code
//!    computed up front.
//! 3. [Brush] - made from a [Style], it wraps any text in that escape code followed by
//!    a reset code, so color never bleeds into the rest of the output.
//!
//! ```rust
//! use r3bl_ansi_paint::*;
//!
//! // Default brushes are available for your convenience.
//! println!("This is {}", red().paint("red"));
//!
//! // Or you can create new ones.
//! let weird = new_brush(Paint::Purple, Paint::Cyan);
//! println!("This color is {}", weird.paint("weird"));
//!
//! // Styles are immutable, "changing" one gives you a new one.
//! let red_bg = Style::new(Paint::Red, Paint::Yellow);
//! let green_fg = red_bg.with_foreground(Paint::Green);
//! println!("This is {} but not really", green_fg.brush().paint("kind of green"));
//!
//! assert_eq!(
//!     new_brush(None, Paint::Red).paint("red"),
//!     "\x1b[1;31mred\x1b[0m"
//! );
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod brush;
pub mod paint;
pub mod paint_error;
pub mod sgr_code;
pub mod style;

// Re-export.
pub use brush::*;
pub use paint::*;
pub use paint_error::*;
pub use sgr_code::{sgr_code_impl::*, *};
pub use style::*;
