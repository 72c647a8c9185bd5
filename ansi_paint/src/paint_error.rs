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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Building a [crate::Style] or a [crate::Brush] can't fail. Errors only show up at the
//! boundary where untyped text is turned into a [crate::Paint].

use miette::Diagnostic;

/// Type alias for callers that want to bubble a [PaintError] up as a
/// [miette::Report].
pub type PaintResult<T> = miette::Result<T>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum PaintError {
    #[error("Unknown color name: {name:?}")]
    #[diagnostic(
        code(r3bl_ansi_paint::unknown_color),
        help("Use one of the 16 paint names, eg: `red`, `dark_red`, `light_gray`")
    )]
    UnknownColor { name: String },

    #[error("Malformed color code: {code:?}")]
    #[diagnostic(
        code(r3bl_ansi_paint::malformed_code),
        help("A color code looks like `<0|1>;<30..=37>`, eg: `1;31`")
    )]
    MalformedCode { code: String },
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::{PaintError, PaintResult};
    use crate::Paint;

    #[test]
    fn error_message() {
        let err = PaintError::UnknownColor {
            name: "mauve".into(),
        };
        assert_eq!(err.to_string(), r#"Unknown color name: "mauve""#);
        assert_eq!(
            err.code().map(|it| it.to_string()),
            Some("r3bl_ansi_paint::unknown_color".to_string())
        );
    }

    #[test]
    fn bubbles_up_as_report() {
        fn parse(name: &str) -> PaintResult<Paint> { Ok(name.parse::<Paint>()?) }

        assert!(parse("cyan").is_ok());

        let report = parse("teal").unwrap_err();
        assert_eq!(
            report.downcast_ref::<PaintError>(),
            Some(&PaintError::UnknownColor {
                name: "teal".into()
            })
        );
    }
}
