// src/core/html.rs
//
// Hand-rolled HTML scanning. The site markup is messy enough that we only
// rely on case-insensitive tag matching and local scanning within known
// blocks, never on a full parse.

use super::sanitize::{normalize_entities, normalize_ws};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub href: String,
    pub anchor: String,
}

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner content between an opening pattern (e.g. `<div class="section15"`)
/// and the first subsequent closing pattern. Case-insensitive.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Byte range of the next `<name ...>...</name>` element at or after `from`.
/// The tag name must be followed by whitespace or `>` so that e.g. "a" does
/// not match "article".
pub fn next_elem_block_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = join!("<", &to_lower(name));
    let close = join!("</", &to_lower(name), ">");
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&open)? + pos;
        let boundary = lc.as_bytes().get(start + open.len()).copied();
        if !matches!(boundary, Some(b' ') | Some(b'>') | Some(b'\t') | Some(b'\r') | Some(b'\n')) {
            pos = start + open.len();
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(&close)?;
        return Some((start, open_end + end_rel + close.len()));
    }
}

/// Like `next_elem_block_ci` but with a raw opening pattern, for matching on
/// attributes, e.g. `<div class="description"`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Value of an attribute inside a single opening tag. Handles quoted and
/// bare values.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let pat = join!(&to_lower(name), "=");
    let i = lc.find(&pat)? + pat.len();
    let rest = &tag[i..];
    match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let end = rest[1..].find(q)? + 1;
            Some(rest[1..end].to_string())
        }
        _ => {
            let end = rest
                .find(|c: char| c == '>' || c.is_whitespace())
                .unwrap_or(rest.len());
            Some(rest[..end].trim().to_string())
        }
    }
}

/// First `<a href=…>…</a>` in the fragment, with tag-stripped anchor text.
pub fn first_link(s: &str) -> Option<Hyperlink> {
    links_in(s).into_iter().next()
}

/// All hyperlinks in the fragment, in source order.
pub fn links_in(s: &str) -> Vec<Hyperlink> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = next_elem_block_ci(s, "a", pos) {
        let block = &s[start..end];
        let open_end = match block.find('>') {
            Some(i) => i + 1,
            None => break,
        };
        if let Some(href) = attr_value(&block[..open_end], "href") {
            let anchor = strip_tags(normalize_entities(&inner_after_open_tag(block)));
            out.push(Hyperlink { href, anchor });
        }
        pos = end;
    }
    out
}

/// Split a paragraph's inner markup into a bold lead-in and the remaining
/// body, when the paragraph opens with `<b>…</b>` or `<strong>…</strong>`.
/// A separating ":" after the bold block belongs to the lead-in and is
/// dropped from the body.
pub fn bold_lead_in(p_inner: &str) -> Option<(String, String)> {
    let trimmed = p_inner.trim_start();
    let lc = to_lower(trimmed);
    let name = if lc.starts_with("<b>") || lc.starts_with("<b ") {
        "b"
    } else if lc.starts_with("<strong>") || lc.starts_with("<strong ") {
        "strong"
    } else {
        return None;
    };
    let (start, end) = next_elem_block_ci(trimmed, name, 0)?;
    let lead = strip_tags(normalize_entities(&inner_after_open_tag(&trimmed[start..end])));
    let mut body = trimmed[end..].trim_start();
    if let Some(rest) = body.strip_prefix(':') {
        body = rest.trim_start();
    }
    // The colon often sits inside the bold block instead
    let lead = lead.trim_end_matches(':').trim().to_string();
    Some((lead, body.to_string()))
}
