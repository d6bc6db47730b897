/// Characters JavaScript's `\s` treats as whitespace. Differs from
/// `char::is_whitespace`: includes U+FEFF, excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Validates that the input looks like a plausible email address.
/// Rules:
/// - No whitespace anywhere (JavaScript `\s` set)
/// - Exactly one `@`, with a non-empty local part
/// - The domain contains a `.` that is neither its first nor its last character
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Returns the domain part of an address that already passed `is_valid_email`.
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .split_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}
