use crate::constants::value::WILDCARD;

/// Merges `token` into an existing `Vary` header value.
///
/// The existing value may be absent, a single token or a comma-separated
/// list. Membership is an exact, case-sensitive comparison of trimmed
/// members. A `*` member subsumes every other token, so nothing is ever
/// appended to it.
pub fn merge_vary(current: Option<&str>, token: &str) -> String {
    let token = token.trim();
    let existing = match current.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return token.to_string(),
    };

    let mut members = existing
        .split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty());

    if members.clone().any(|member| member == WILDCARD) {
        return WILDCARD.to_string();
    }

    if token.is_empty() || members.any(|member| member == token) {
        return existing.to_string();
    }

    format!("{existing}, {token}")
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;
