// tests/prereq_pipeline.rs
//
// End-to-end checks of the prerequisite pipeline: raw Prerequisites markup
// in, typed entry list out.

use pfsrd_scrape::model::{ClassLevel, Prereq};
use pfsrd_scrape::prereq::parse_prerequisites;

fn special(v: &str) -> Prereq {
    Prereq::Special(v.to_string())
}

#[test]
fn entries_preserve_source_order() {
    assert_eq!(
        parse_prerequisites("Str 13, Dex 15"),
        vec![Prereq::Str("13".into()), Prereq::Dex("15".into())]
    );
}

#[test]
fn classification_is_total() {
    let inputs = [
        "Str 13",
        "completely unrecognizable clause",
        "x",
        "7",
        "<i>odd markup</i>",
    ];
    for input in inputs {
        let entries = parse_prerequisites(input);
        assert_eq!(entries.len(), 1, "one clause, one entry: {input:?}");
    }
}

#[test]
fn linked_disjunction_builds_a_multi() {
    let raw = concat!(
        r#"<a href="https://www.d20pfsrd.com/feats/combat-feats/power-attack">Power Attack</a>"#,
        " or ",
        r#"<a href="https://www.d20pfsrd.com/feats/combat-feats/weapon-focus">Weapon Focus</a>"#,
    );
    assert_eq!(
        parse_prerequisites(raw),
        vec![Prereq::Either(
            Box::new(Prereq::Feat("Power Attack".into())),
            Box::new(Prereq::Feat("Weapon Focus".into())),
        )]
    );
}

#[test]
fn comma_or_disjunction_pairs_across_tokens() {
    let raw = concat!(
        "Str 13, ",
        r#"<a href="https://www.d20pfsrd.com/feats/combat-feats/dodge">Dodge</a>, "#,
        r#"or <a href="https://www.d20pfsrd.com/feats/combat-feats/mobility">Mobility</a>"#,
    );
    assert_eq!(
        parse_prerequisites(raw),
        vec![
            Prereq::Str("13".into()),
            Prereq::Either(
                Box::new(Prereq::Feat("Dodge".into())),
                Box::new(Prereq::Feat("Mobility".into())),
            ),
        ]
    );
}

#[test]
fn disjunction_members_keep_left_right_order() {
    let entries = parse_prerequisites("Stealth 5 ranks or Acrobatics 5 ranks");
    assert_eq!(
        entries,
        vec![Prereq::Either(
            Box::new(Prereq::Stealth("5".into())),
            Box::new(Prereq::Acrobatics("5".into())),
        )]
    );
}

#[test]
fn rank_suffix_forms_classify_alike() {
    for raw in ["Stealth 5 ranks", "Stealth 5 rank", "Stealth 5"] {
        assert_eq!(parse_prerequisites(raw), vec![Prereq::Stealth("5".into())]);
    }
}

#[test]
fn unresolved_disjunction_collapses_flat() {
    // Neither branch matches a concrete rule: the structured Multi would
    // overstate what we know, so the whole list flattens.
    assert_eq!(
        parse_prerequisites("Evasive demeanor, or Fearless disposition"),
        vec![special("Evasive demeanor, Fearless disposition")]
    );
}

#[test]
fn mixed_list_never_collapses() {
    assert_eq!(
        parse_prerequisites("Str 13, Evasive demeanor"),
        vec![Prereq::Str("13".into()), special("Evasive demeanor")]
    );
}

#[test]
fn trailing_full_stop_is_dropped() {
    assert_eq!(
        parse_prerequisites("base attack bonus +6."),
        vec![Prereq::Bab("+6".into())]
    );
}

#[test]
fn semicolon_groups_flatten_in_order() {
    let entries = parse_prerequisites("Str 13, Power Attack feat; base attack bonus +1");
    assert_eq!(
        entries,
        vec![
            Prereq::Str("13".into()),
            Prereq::Feat("Power Attack".into()),
            Prereq::Bab("+1".into()),
        ]
    );
}

#[test]
fn class_link_and_level_compound() {
    let raw = r#"<a href="https://www.d20pfsrd.com/classes/base-classes/gunslinger">Gunslinger</a> 1st"#;
    assert_eq!(
        parse_prerequisites(raw),
        vec![Prereq::ClassLevel(ClassLevel {
            class: "Gunslinger".into(),
            level: "1st".into(),
        })]
    );
}

#[test]
fn realistic_clause_list() {
    let raw = concat!(
        "Dex 15, ",
        r#"<a href="https://www.d20pfsrd.com/feats/combat-feats/dodge">Dodge</a>, "#,
        "Acrobatics 5 ranks, sneak attack class feature; caster level 7th.",
    );
    assert_eq!(
        parse_prerequisites(raw),
        vec![
            Prereq::Dex("15".into()),
            Prereq::Feat("Dodge".into()),
            Prereq::Acrobatics("5".into()),
            Prereq::ClassFeature("sneak attack".into()),
            Prereq::CasterLevel("7th".into()),
        ]
    );
}

#[test]
fn empty_input_yields_empty_list() {
    assert!(parse_prerequisites("").is_empty());
}
