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

use r3bl_ansi_paint::{Paint, PaintResult, Style, blue, cyan, green, new_brush, red,
                      yellow};
use strum::IntoEnumIterator;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output always goes to stderr.
#[derive(Debug, Clone, Copy)]
struct DemoConfig {
    level_filter: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
        }
    }
}

fn init_tracing(config: DemoConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(config.level_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> PaintResult<()> {
    init_tracing(DemoConfig::default());

    // Default brushes are available for your convenience. You can invoke them directly.
    println!("This is {}", red().paint("red"));

    // Or name them and invoke them later.
    let yel = yellow().into_fn();
    println!("This is {}", yel("yellow"));

    // Or you can create new ones.
    let weird = new_brush(Paint::Purple, Paint::Cyan);
    println!("This color is {}", weird.apply("weird"));

    // Create a Style. Styles are immutable, so the original one is left unchanged.
    {
        let red_bg = Style::new(Paint::Red, Paint::Yellow);
        let green_fg = red_bg.with_foreground(Paint::Green);
        let green = green_fg.brush();
        println!("This is {} but not really", green.paint("kind of green"));
        println!("And this is still {}", red_bg.paint("yellow on red"));
    }

    // You can use it with all sorts of things, eg: prefixes for log output.
    {
        let ok = format!("[{}]", green().paint("OK"));
        let omg = format!("[{}]", red().paint("OMG"));
        println!("{ok}\tEverything was going {} until...", cyan().paint("fine"));
        eprintln!(
            "{omg}\t{} killed {} !!!",
            red().paint("Locke"),
            blue().paint("Jacob")
        );
    }

    // Parse paints from text. Unknown names are reported, not panicked on.
    for name in ["dark_green", "LightGray", "chartreuse"] {
        match name.parse::<Paint>() {
            Ok(paint) => new_brush(None, paint).apply(name).println(),
            Err(err) => tracing::warn!(%err, "skipping"),
        }
    }

    // Every paint on the terminal's own background, and on black.
    for paint in Paint::iter() {
        let label = paint.to_string();
        print!("{} ", new_brush(None, paint).paint(&label));
        print!("{}", new_brush(Paint::Black, paint).paint(&label));
        println!();
    }

    // Codes can be parsed too, and a bad one bubbles up as a miette report.
    let paint = Paint::from_code("1;36")?;
    tracing::info!(code = %new_brush(None, paint).code().escape_debug(), "done");

    Ok(())
}
