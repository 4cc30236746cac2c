// src/prereq/mod.rs
//! Prerequisite normalization: raw "Prerequisites" markup in, ordered list
//! of typed entries out.
//!
//! Pipeline: tokenize (split on `;`/`,`, pair disjunctions) → classify each
//! clause (ordered rule table, link-aware, total) → collapse all-Special
//! lists. Entries preserve source order; disjunction members preserve
//! left-right order.

mod classify;
mod collapse;
mod tokenize;

pub use classify::classify;
pub use tokenize::{tokenize, Token};

use crate::model::Prereq;

pub fn parse_prerequisites(raw: &str) -> Vec<Prereq> {
    let tokens = tokenize::tokenize(raw);

    // A lone irreducible clause stays one catch-all entry, minus any
    // leading connector left over from the sentence frame.
    if tokens.len() == 1 {
        let entry = classify::classify(&tokens[0].raw);
        let entry = match entry {
            Prereq::Special(v) => Prereq::Special(strip_clause_lead(&v)),
            other => other,
        };
        return vec![entry];
    }

    let mut entries = Vec::with_capacity(tokens.len());
    let mut i = 0usize;
    while i < tokens.len() {
        if i + 1 < tokens.len() && tokens[i + 1].group == tokens[i].group {
            let first = classify::classify(&tokens[i].raw);
            let second = classify::classify(&tokens[i + 1].raw);
            entries.push(Prereq::Either(Box::new(first), Box::new(second)));
            i += 2;
        } else {
            entries.push(classify::classify(&tokens[i].raw));
            i += 1;
        }
    }

    collapse::collapse_specials(entries)
}

/// Drop a leading connector word (or a stray ": " left by label splitting)
/// from a lone catch-all clause.
fn strip_clause_lead(s: &str) -> String {
    let mut t = s.trim();
    t = t.strip_prefix(':').map(str::trim_start).unwrap_or(t);
    for connector in ["a ", "an ", "the "] {
        let n = connector.len();
        if t.len() > n && t.is_char_boundary(n) && t[..n].eq_ignore_ascii_case(connector) {
            t = &t[n..];
            break;
        }
    }
    s!(t.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_special_clause_loses_its_connector() {
        assert_eq!(
            parse_prerequisites("a sworn oath to a patron"),
            vec![Prereq::Special(s!("sworn oath to a patron"))]
        );
    }

    #[test]
    fn lone_concrete_clause_is_untouched() {
        assert_eq!(parse_prerequisites("Str 13"), vec![Prereq::Str(s!("13"))]);
    }

    #[test]
    fn connector_stripping_requires_word_boundary() {
        assert_eq!(
            parse_prerequisites("another deity's blessing"),
            vec![Prereq::Special(s!("another deity's blessing"))]
        );
    }
}
