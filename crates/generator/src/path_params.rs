//! Path-parameter extraction from URL templates

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches well-formed `{name}` spans; nested or unbalanced braces are not
/// recognized as parameters.
static PATH_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("path parameter regex is valid"));

/// Extract the distinct path parameter names from a path template, in order
/// of first appearance.
///
/// A template with no parameters yields an empty vec; that is not an error.
pub fn extract_path_params(path: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in PATH_PARAM_RE.captures_iter(path) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}
