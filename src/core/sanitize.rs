// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#8217;", "\u{2019}")
        .replace("&#8211;", "\u{2013}")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a feat name safe as a file stem. Spaces, commas and parens are kept
/// (they are part of real feat names); path separators and other hostile
/// characters are dropped.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {}
            _ => out.push(ch),
        }
    }
    let out = normalize_ws(&out);
    if out.is_empty() { s!("unnamed") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn sanitize_filename_keeps_real_name_punctuation() {
        assert_eq!(sanitize_filename("Craft Wand"), "Craft Wand");
        assert_eq!(sanitize_filename("Greater Spell Focus (Evocation)"), "Greater Spell Focus (Evocation)");
        assert_eq!(sanitize_filename("a/b: c?"), "ab c");
        assert_eq!(sanitize_filename("///"), "unnamed");
    }
}
