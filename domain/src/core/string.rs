//! String utilities for the domain layer.

/// Mask a secret (access token, anon key) for display and logs.
///
/// Keeps the first and last four characters when the secret is long enough,
/// otherwise hides it entirely. Cuts only on UTF-8 character boundaries.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Lowercase ASCII suffix check that never allocates.
pub fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    let (value, suffix) = (value.as_bytes(), suffix.as_bytes());
    value.len() >= suffix.len() && value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
