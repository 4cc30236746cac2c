// src/fields.rs
//
// Assigns semantic roles to a feat article's paragraph stream. One
// left-to-right pass; a bold lead-in switches the current label and the
// label then sticks for unlabeled continuation paragraphs.

use crate::core::html::strip_tags;
use crate::core::sanitize::normalize_entities;
use crate::model::{ContentFragment, FieldLabel};

/// Map a bold lead-in to a canonical field label. Unknown non-empty
/// lead-ins ("Goal", "Note", …) count as ad-hoc Special headers; an absent
/// or empty lead-in leaves the current label untouched.
pub fn normalize_label(lead_in: &str) -> FieldLabel {
    match lead_in.trim() {
        "" => FieldLabel::Unlabeled,
        "Benefit" | "Benefits" | "Benefit(s)" => FieldLabel::Benefit,
        "Normal" => FieldLabel::Normal,
        "Special" => FieldLabel::Special,
        "Prerequisite" | "Prerequisites" | "Prerequisite(s)" => FieldLabel::Prerequisites,
        _ => FieldLabel::Special,
    }
}

/// Per-label text buckets for one feat article. Benefit/Normal/Special are
/// flattened; the prerequisites bucket keeps raw markup because its
/// hyperlinks drive classification later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldBuckets {
    pub benefit: String,
    pub normal: String,
    pub special: String,
    pub prerequisites: Option<String>,
}

pub fn classify_fields(fragments: &[ContentFragment]) -> FieldBuckets {
    let mut current = FieldLabel::Unlabeled;
    let mut buckets = FieldBuckets::default();

    for frag in fragments {
        if let Some(lead) = &frag.lead_in {
            let label = normalize_label(lead);
            if label != FieldLabel::Unlabeled {
                current = label;
            }
        }
        match current {
            FieldLabel::Benefit => push_flat(&mut buckets.benefit, &frag.body),
            FieldLabel::Normal => push_flat(&mut buckets.normal, &frag.body),
            FieldLabel::Special => push_flat(&mut buckets.special, &frag.body),
            FieldLabel::Prerequisites => push_raw(&mut buckets.prerequisites, &frag.body),
            // Description is cut out by the page layer before this pass
            FieldLabel::Description | FieldLabel::Unlabeled => {}
        }
    }

    buckets.benefit = strip_label_boilerplate(&buckets.benefit, "Benefit");
    buckets.normal = strip_label_boilerplate(&buckets.normal, "Normal");
    buckets.special = strip_label_boilerplate(&buckets.special, "Special");
    buckets
}

fn push_flat(bucket: &mut String, body: &str) {
    let text = strip_tags(normalize_entities(body));
    if text.is_empty() {
        return;
    }
    if !bucket.is_empty() {
        bucket.push(' ');
    }
    bucket.push_str(&text);
}

fn push_raw(bucket: &mut Option<String>, body: &str) {
    match bucket {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(body);
        }
        None => *bucket = Some(s!(body)),
    }
}

/// Some pages carry the label inside the paragraph text as well
/// ("Benefit: You gain …"). Strip that echo, matching the label name
/// case-insensitively — never its synonyms.
fn strip_label_boilerplate(text: &str, label: &str) -> String {
    let prefix_len = label.len() + 2;
    let bytes = text.as_bytes();
    if bytes.len() >= prefix_len
        && bytes[..label.len()].eq_ignore_ascii_case(label.as_bytes())
        && &bytes[label.len()..prefix_len] == b": "
    {
        return text[prefix_len..].to_string();
    }
    s!(text)
}
