//! City-name canonicalization used as the join key between the rent and job tables.

/// Administrative suffixes dropped from the end of a city name.
const CITY_SUFFIXES: &[&str] = &["City", "Town", "Village", "CDP"];

/// Normalizes a raw city string to its join key.
///
/// Steps: drop everything from the first comma, strip trailing administrative
/// suffixes (`"Springfield City"` → `"Springfield"`), trim, title-case.
/// Missing input yields an empty string. The result is a fixed point:
/// `normalize_city(Some(&normalize_city(x))) == normalize_city(x)`.
pub fn normalize_city(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let mut name = raw.split(',').next().unwrap_or_default().trim();
    while let Some(stripped) = strip_suffix(name) {
        name = stripped.trim_end();
    }

    title_case(name.trim())
}

/// Removes one whitespace-separated trailing suffix, matched case-insensitively.
fn strip_suffix(name: &str) -> Option<&str> {
    let (head, last) = name.rsplit_once(char::is_whitespace)?;
    if head.trim().is_empty() {
        return None;
    }
    CITY_SUFFIXES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(last))
        .then_some(head)
}

/// Uppercases the first letter of each word and lowercases the rest.
/// A word starts at any letter not preceded by another letter.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                let mut upper = c.to_uppercase();
                if let Some(first) = upper.next() {
                    out.push(first);
                }
                // "ß" uppercases to "SS"; keep only the first as a capital
                for rest in upper {
                    out.extend(rest.to_lowercase());
                }
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
