pub const HOME_TITLE: &str = "Welcome";
pub const FALLBACK_TITLE: &str = "Python Vibe Coding";

/// Title shown in the header for a route path.
///
/// `/course/<module>/<lesson>` paths turn the lesson slug into a title:
/// numeric prefix dropped, underscores become spaces, every word capitalized.
#[must_use]
pub fn header_title(path: &str) -> String {
    if path == "/" {
        return HOME_TITLE.to_string();
    }

    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    match parts.as_slice() {
        ["course", _, .., last] => title_from_slug(last),
        _ => FALLBACK_TITLE.to_string(),
    }
}

fn title_from_slug(slug: &str) -> String {
    let spaced = strip_numeric_prefix(slug).replace('_', " ");

    let mut title = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if at_word_start && is_word_char(ch) {
            title.extend(ch.to_uppercase());
        } else {
            title.push(ch);
        }
        at_word_start = !is_word_char(ch);
    }
    title
}

fn strip_numeric_prefix(slug: &str) -> &str {
    let digits = slug.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && slug.as_bytes().get(digits) == Some(&b'_') {
        &slug[digits + 1..]
    } else {
        slug
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
