//! Stderr tracing for `debug_log!`, switched on with QE_DEBUG=1.
//!
//! Lines look like `[qe core::solver] linear a=1 b=2`: the tag is the calling
//! module with the crate name stripped.
use std::fmt;
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| enabled_by(std::env::var("QE_DEBUG").ok().as_deref()))
}

fn enabled_by(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "true" | "on"))
}

/// Tagged trace line for `module` (a `module_path!()`).
pub fn line(module: &str, message: fmt::Arguments<'_>) -> String {
    let tag = module
        .split_once("::")
        .map(|(_, rest)| rest)
        .unwrap_or("main");
    format!("[qe {tag}] {message}")
}

/// `eprintln!` that only fires when tracing is enabled, tagged with the calling module.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            eprintln!("{}", $crate::core::debug::line(module_path!(), format_args!($($arg)*)));
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_tag_strips_crate_name() {
        assert_eq!(line("qe_solver::core::solver", format_args!("d={}", 4)), "[qe core::solver] d=4");
    }
    #[test] fn test_binary_root_is_main() {
        assert_eq!(line("qe_solver", format_args!("done")), "[qe main] done");
    }
    #[test] fn test_switch_values() {
        assert!(enabled_by(Some("1")));
        assert!(enabled_by(Some(" on\n")));
        assert!(!enabled_by(Some("0")));
        assert!(!enabled_by(None));
    }
}
