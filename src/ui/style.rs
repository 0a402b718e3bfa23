use console::style;
use std::fmt::Display;

/// White bold: table headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, missing values
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan underlined: URLs
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Green: improved metrics; bold when the change is strong
pub fn improved<D: Display>(text: D, strong: bool) -> String {
    let styled = style(text).green();
    if strong { styled.bold() } else { styled }.to_string()
}

/// Red: regressed metrics; bold when the change is strong
pub fn regressed<D: Display>(text: D, strong: bool) -> String {
    let styled = style(text).red();
    if strong { styled.bold() } else { styled }.to_string()
}

/// Yellow: warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}
