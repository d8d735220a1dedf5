//! Name normalization and line protocol escaping.
//!
//! Both halves share one rule: a character is only special when it is not
//! already escaped, i.e. not immediately preceded by a backslash. A
//! character at the start of the string counts as unescaped.

const TAG_SPECIALS: [char; 3] = [',', '=', ' '];
const MEASUREMENT_SPECIALS: [char; 2] = [',', ' '];

/// Derives a canonical measurement or series name.
///
/// With `lowercase` set the value is case folded first. When `replacement`
/// is present every unescaped space is replaced by it; `Some("")` deletes
/// spaces and `None` leaves them alone. Escaped spaces (`\ `) are never
/// altered, preserving line protocol escaping applied upstream.
pub fn normalize(value: &str, lowercase: bool, replacement: Option<&str>) -> String {
    let folded = if lowercase {
        value.to_lowercase()
    } else {
        value.to_owned()
    };
    match replacement {
        Some(rep) => replace_unescaped_spaces(&folded, rep),
        None => folded,
    }
}

/// [normalize] with the usual defaults: lowercase, spaces to underscores.
pub fn normalize_name(value: &str) -> String {
    normalize(value, true, Some("_"))
}

/// Backslash-escapes `,`, `=` and space for use in a tag key or value.
pub fn escape_tag_part(value: &str) -> String {
    escape(value, &TAG_SPECIALS)
}

/// Backslash-escapes `,` and space for use as a measurement name.
pub fn escape_measurement(value: &str) -> String {
    escape(value, &MEASUREMENT_SPECIALS)
}

fn replace_unescaped_spaces(value: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;
    for c in value.chars() {
        if c == ' ' && !escaped {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
        escaped = c == '\\';
    }
    out
}

fn escape(value: &str, specials: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;
    for c in value.chars() {
        if specials.contains(&c) && !escaped {
            out.push('\\');
        }
        out.push(c);
        escaped = c == '\\';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_normalize_with_defaults() {
        assert_eq!(normalize_name("Hello World"), "hello_world");
    }

    #[test]
    fn escaped_space_is_preserved() {
        assert_eq!(normalize("Hello\\ World", true, Some("_")), "hello\\ world");
    }

    #[test]
    fn empty_replacement_removes_spaces() {
        assert_eq!(normalize("a b c", false, Some("")), "abc");
    }

    #[test]
    fn none_replacement_keeps_spaces() {
        assert_eq!(normalize("A b", true, None), "a b");
    }

    #[test]
    fn leading_space_counts_as_unescaped() {
        assert_eq!(normalize(" x", false, Some("_")), "_x");
    }

    #[test]
    fn can_escape_tag_part() {
        assert_eq!(escape_tag_part("a b,c=d"), "a\\ b\\,c\\=d");
    }

    #[test]
    fn escape_does_not_double_escape() {
        assert_eq!(escape_tag_part("a\\ b"), "a\\ b");
        assert_eq!(escape_measurement("cpu\\,total"), "cpu\\,total");
    }

    #[test]
    fn can_escape_measurement() {
        assert_eq!(escape_measurement("cpu total,0"), "cpu\\ total\\,0");
        // equals is not special in a measurement name
        assert_eq!(escape_measurement("a=b"), "a=b");
    }
}
