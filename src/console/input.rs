// SPDX-License-Identifier: GPL-3.0-only

/// Split `{a, b, c}` into trimmed attributes
///
/// Returns `None` unless the text is wrapped in braces. `{}` is an empty list.
pub fn parse_brace_list(input: &str) -> Option<Vec<String>> {
    let inner = input.trim().strip_prefix('{')?.strip_suffix('}')?.trim();
    if inner.is_empty() {
        return Some(Vec::new());
    }
    Some(inner.split(',').map(|part| part.trim().to_string()).collect())
}

pub fn parse_int(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}
