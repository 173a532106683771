//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Up to two uppercase initials of a name, for avatar circles.
///
/// Usage in templates: `{{ details.customer|initials }}`
#[askama::filter_fn]
pub fn initials(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(initials_of(&value.to_string()))
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials_of("Stanley Bryant"), "SB");
        assert_eq!(initials_of("rosa"), "R");
        assert_eq!(initials_of("Wesley J Chambers"), "WJ");
        assert_eq!(initials_of(""), "");
    }
}
