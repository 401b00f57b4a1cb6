use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, urls, zero scores
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings, hints
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: entity names, paths
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: ranks, round numbers
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Score coloured by sign: green above zero, red below, dim at zero
pub fn signed(score: i64) -> String {
    match score.signum() {
        1 => style(format!("+{score}")).green().to_string(),
        -1 => style(score).red().to_string(),
        _ => style(score).dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_keeps_the_number_visible() {
        assert!(signed(4).contains("+4"));
        assert!(signed(-2).contains("-2"));
        assert!(signed(0).contains('0'));
    }
}
