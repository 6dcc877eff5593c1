//! Console presentation: color capability and root formatting.

use clap::ValueEnum;
use colored::Colorize;
use crossterm::tty::IsTty;
use serde::Deserialize;

use crate::core::{normalize, Roots};

/// Default number of decimals, same as C's `%lf`.
pub const DEFAULT_PRECISION: usize = 6;

/// Styling for status lines. Implementations decide whether escape codes are emitted.
pub trait Palette {
    fn supports_color(&self) -> bool;
    /// Passing / informational status.
    fn ok(&self, text: &str) -> String;
    /// Failing status or user-facing error.
    fn fail(&self, text: &str) -> String;
}

/// White on green / white on red.
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn supports_color(&self) -> bool {
        true
    }
    fn ok(&self, text: &str) -> String {
        text.white().on_green().to_string()
    }
    fn fail(&self, text: &str) -> String {
        text.white().on_red().to_string()
    }
}

pub struct PlainPalette;

impl Palette for PlainPalette {
    fn supports_color(&self) -> bool {
        false
    }
    fn ok(&self, text: &str) -> String {
        text.to_string()
    }
    fn fail(&self, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn palette(self) -> Box<dyn Palette> {
        let colored = match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_tty(),
        };
        if colored {
            Box::new(AnsiPalette)
        } else {
            Box::new(PlainPalette)
        }
    }
}

/// Make `colored` honour a color-capable palette even when stdout is a pipe.
/// Plain palettes leave the global switch alone.
pub fn activate(palette: &dyn Palette) {
    if palette.supports_color() {
        colored::control::set_override(true);
    }
}

fn value(x: f64, precision: usize) -> String {
    format!("{:.*}", precision, normalize(x))
}

/// Human-readable lines for a solver result.
pub fn describe(roots: &Roots, precision: usize) -> Vec<String> {
    match *roots {
        Roots::Two(x1, x2) => vec![
            format!("x1 = {}", value(x1, precision)),
            format!("x2 = {}", value(x2, precision)),
        ],
        Roots::One(x) => vec![format!("x = {}", value(x, precision))],
        Roots::None => vec!["No roots".to_string()],
        Roots::Infinite => vec!["Infinite roots".to_string()],
    }
}
