use std::fmt;

use crate::cli::output;

/// Neutral status line, e.g. how much reference data was loaded.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Shown for recoverable problems such as a search with no hits.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Header printed when a command starts.
pub fn print_section(title: impl fmt::Display) {
    output::section(title);
}
