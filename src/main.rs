//! qe-solver: reads `a b c` from stdin and prints the real roots of a*x^2 + b*x + c = 0.

use clap::Parser; // trait import enables SolverCli::parse()
use crossterm::tty::IsTty;
use std::io;

use qe_solver::cli::SolverCli;
use qe_solver::commands::solve;
use qe_solver::config;
use qe_solver::render;

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("Solving QE"));
}

fn main() -> anyhow::Result<()> {
    let args = SolverCli::parse();
    let settings = config::load(&args.config).with_overrides(&args);

    if io::stdout().is_tty() {
        set_console_title();
    }
    let palette = settings.color.palette();
    render::activate(palette.as_ref());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = solve::run(&settings, palette.as_ref(), &mut stdin.lock(), &mut stdout.lock())?;
    qe_solver::debug_log!("session ended: {outcome:?}");
    Ok(())
}
