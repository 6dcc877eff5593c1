use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::render::ColorChoice;

#[derive(Debug, Parser)]
#[command(
    name = "qe-solver",
    about = "Solve a*x^2 + b*x + c = 0 for real x; reads a b c from stdin",
    version
)]
pub struct SolverCli {
    /// Path to config (TOML); default: ~/.qe-solver/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to color output (overrides config)
    #[arg(long = "color", value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Skip the built-in solver checks printed at startup
    #[arg(long = "skip-self-test", action = ArgAction::SetTrue)]
    pub skip_self_test: bool,

    /// Decimals printed for each root (overrides config)
    #[arg(long = "precision", value_name = "N")]
    pub precision: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = SolverCli::try_parse_from(["qe-solver"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.color.is_none());
        assert!(!args.skip_self_test);
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(SolverCli::try_parse_from(["qe-solver", "--color", "rainbow"]).is_err());
    }

    #[test]
    fn parses_all_flags() {
        let args = SolverCli::try_parse_from([
            "qe-solver", "--config", "q.toml", "--color", "always", "--precision", "3",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("q.toml")));
        assert_eq!(args.color, Some(ColorChoice::Always));
        assert_eq!(args.precision, Some(3));
    }
}
