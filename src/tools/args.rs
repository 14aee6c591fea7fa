//! Positional argument parsing for single-string tool inputs.

/// Split a comma-joined tool input into trimmed positional arguments.
///
/// Without a comma the input comes back unmodified as the only element.
/// When `expected` is given and enough pieces exist, only the first
/// `expected` are returned; otherwise every piece is.
pub fn parse_comma_args(input: &str, expected: Option<usize>) -> Vec<String> {
    if !input.contains(',') {
        return vec![input.to_string()];
    }

    let parts: Vec<String> = input.split(',').map(|p| p.trim().to_string()).collect();
    match expected {
        Some(count) if parts.len() >= count => parts.into_iter().take(count).collect(),
        _ => parts,
    }
}
