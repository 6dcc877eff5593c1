//! One interactive session: self-test, banner, read a b c, print the roots.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::selftest;
use crate::config::Settings;
use crate::core::{solve_quadratic, Roots, SolveError};
use crate::io::{read_coefficients, Input};
use crate::render::{describe, Palette};

pub const PROMPT: &str = "Enter a b c>>";

/// How the session ended. Every variant maps to exit status 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Solved(Roots),
    Rejected(SolveError),
    Incorrect,
    EndOfInput,
    Exit,
}

fn banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Solving an equation ax^2+bx+c=0")?;
    writeln!(out, "Version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "To close the program, enter the letter 'x'")?;
    writeln!(out)?;
    write!(out, "{PROMPT}")?;
    out.flush()
}

pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    palette: &dyn Palette,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    if settings.self_test {
        selftest::run_all()
            .print(palette, out)
            .context("writing self-test report")?;
    }
    banner(out).context("writing prompt")?;

    let read = read_coefficients(input).context("reading coefficients")?;
    crate::debug_log!("input {read:?}");

    let outcome = match read {
        Input::Incorrect => {
            writeln!(out, "\n{}", palette.fail("Error: incorrect enter"))?;
            Outcome::Incorrect
        }
        Input::EndOfInput => {
            writeln!(out, "\n{}", palette.fail("Error: The enter is void"))?;
            Outcome::EndOfInput
        }
        Input::Exit => Outcome::Exit,
        Input::Coefficients(c) => match solve_quadratic(c.a, c.b, c.c) {
            Ok(roots) => {
                crate::debug_log!("root code {}", roots.code());
                for line in describe(&roots, settings.precision) {
                    writeln!(out, "{line}")?;
                }
                Outcome::Solved(roots)
            }
            Err(e) => {
                writeln!(out, "{}", palette.fail(&format!("Error: {e}")))?;
                Outcome::Rejected(e)
            }
        },
    };
    out.flush()?;
    Ok(outcome)
}
