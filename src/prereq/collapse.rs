// src/prereq/collapse.rs
//
// When nothing in a prerequisite list resolved to a concrete kind, a
// structured Multi of two catch-alls reads as more certainty than we have.
// Global-or-nothing: only an all-Special list collapses; one concrete entry
// anywhere keeps the whole list structured.

use crate::model::Prereq;

pub fn collapse_specials(entries: Vec<Prereq>) -> Vec<Prereq> {
    let all_special = !entries.is_empty()
        && entries.iter().all(|e| match e {
            Prereq::Special(_) => true,
            Prereq::Either(a, b) => a.is_special() && b.is_special(),
            _ => false,
        });
    if !all_special {
        return entries;
    }

    let mut parts: Vec<String> = Vec::new();
    for entry in entries {
        match entry {
            Prereq::Special(v) => parts.push(v),
            Prereq::Either(a, b) => {
                if let Prereq::Special(v) = *a {
                    parts.push(v);
                }
                if let Prereq::Special(v) = *b {
                    parts.push(v);
                }
            }
            _ => {}
        }
    }
    vec![Prereq::Special(parts.join(", "))]
}
