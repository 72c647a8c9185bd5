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

use pretty_assertions::assert_eq;
use r3bl_ansi_paint::*;
use strum::IntoEnumIterator;

fn all_backgrounds() -> impl Iterator<Item = Option<Paint>> {
    std::iter::once(None).chain(Paint::iter().map(Some))
}

/// Splits `ESC[...m` segments off the front of `it`, returns them and the rest.
fn split_escape_prefix(mut it: &str) -> (Vec<&str>, &str) {
    let mut segments = vec![];
    while let Some(rest) = it.strip_prefix(CSI) {
        let Some(end) = rest.find(SGR) else { break };
        segments.push(&rest[..end]);
        it = &rest[end + SGR.len()..];
    }
    (segments, it)
}

#[test]
fn every_pair_has_well_formed_prefix_and_reset_suffix() {
    for text in ["", "hello", "x;1m", "multi\nline"] {
        for bg in all_backgrounds() {
            for fg in Paint::iter() {
                let painted = new_brush(bg, fg).paint(text);
                assert!(painted.ends_with(RESET));

                let body = &painted[..painted.len() - RESET.len()];
                let (segments, rest) = split_escape_prefix(body);
                assert_eq!(rest, text);

                let fg_params =
                    format!("{};3{}", fg.intensity().code(), fg.hue().offset());
                match bg {
                    None => assert_eq!(segments, vec![fg_params.as_str()]),
                    Some(bg) => {
                        let bg_params = format!("4{}", bg.hue().offset());
                        assert_eq!(segments, vec![bg_params.as_str(), fg_params.as_str()]);
                    }
                }
            }
        }
    }
}

#[test]
fn empty_text_is_prefix_then_reset() {
    for bg in all_backgrounds() {
        for fg in Paint::iter() {
            let style = Style::new(bg, fg);
            assert_eq!(style.paint(""), format!("{}{RESET}", style.code()));
        }
    }
}

#[test]
fn functional_updates_round_trip() {
    let style = Style::new(Paint::DarkBlue, Paint::Red);
    let updated = style
        .with_foreground(Paint::Green)
        .with_foreground(Paint::Yellow);

    assert_eq!(updated, Style::new(style.background(), Paint::Yellow));
    assert_eq!(style.foreground(), Paint::Red);
    assert_eq!(style.code(), "\x1b[44m\x1b[1;31m");
}

#[test]
fn documented_examples() {
    assert_eq!(
        new_brush(None, Paint::Red).paint("red"),
        "\x1b[1;31mred\x1b[0m"
    );
    assert_eq!(
        new_brush(Paint::White, Paint::Black).paint("x"),
        "\x1b[47m\x1b[0;30mx\x1b[0m"
    );
    assert_eq!(black().paint("x"), "\x1b[47m\x1b[0;30mx\x1b[0m");
}

#[test]
fn convenience_brushes() {
    let expected = [
        (light_gray(), None, Paint::LightGray),
        (blue(), None, Paint::Blue),
        (cyan(), None, Paint::Cyan),
        (green(), None, Paint::Green),
        (purple(), None, Paint::Purple),
        (red(), None, Paint::Red),
        (yellow(), None, Paint::Yellow),
        (dark_blue(), None, Paint::DarkBlue),
        (dark_cyan(), None, Paint::DarkCyan),
        (dark_gray(), None, Paint::DarkGray),
        (dark_green(), None, Paint::DarkGreen),
        (dark_purple(), None, Paint::DarkPurple),
        (dark_red(), None, Paint::DarkRed),
        (dark_yellow(), None, Paint::DarkYellow),
        (black(), Some(Paint::White), Paint::Black),
        (white(), Some(Paint::DarkGray), Paint::White),
    ];
    for (brush, bg, fg) in expected {
        assert_eq!(brush, Style::new(bg, fg).brush());
    }
}

#[test]
fn parse_then_paint() -> PaintResult<()> {
    let paint: Paint = "dark_cyan".parse()?;
    assert_eq!(new_brush(None, paint).paint("ok"), "\x1b[0;36mok\x1b[0m");

    let err = "not_a_color".parse::<Paint>().unwrap_err();
    assert!(matches!(err, PaintError::UnknownColor { .. }));
    Ok(())
}
