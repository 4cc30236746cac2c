// src/prereq/classify.rs
//
// Maps one clause token to a typed prerequisite. An ordered rule list,
// first match wins; order matters because several textual prefixes overlap
// (a class name can also be a skill word). The link target disambiguates
// prose that looks identical otherwise: a clause linking into /classes/ is
// a class-level requirement even when the text gives no hint.
//
// The catch-all at the bottom makes classification total; there is no
// error path out of here.

use crate::core::html::{first_link, strip_tags, to_lower, Hyperlink};
use crate::core::sanitize::normalize_entities;
use crate::model::{ClassLevel, Prereq};

pub fn classify(raw: &str) -> Prereq {
    let link = first_link(raw);
    let text = strip_tags(normalize_entities(raw));
    // ASCII-only lowering keeps byte offsets aligned with `text`
    let lower = to_lower(&text);
    let link_category = link.as_ref().and_then(site_category);
    let anchor = link.as_ref().map(|l| l.anchor.as_str()).unwrap_or("");

    // 1. "… class feature"
    if lower.ends_with(" class feature") {
        return Prereq::ClassFeature(s!(text[..text.len() - " class feature".len()].trim_end()));
    }

    // 2. Ability scores, abbreviated or spelled out
    for rule in ABILITIES {
        if lower.starts_with(rule.abbrev) || lower.starts_with(rule.full) {
            return (rule.build)(after_first_space(&text));
        }
    }

    // 3. Base attack bonus
    if lower.starts_with("base attack bonus ") || lower.starts_with("bab ") {
        return Prereq::Bab(after_last_space(&text));
    }

    // 4. Caster level
    if lower.starts_with("caster level") {
        return Prereq::CasterLevel(after_last_space(&text));
    }

    // 5. Character level
    if lower.starts_with("character level ") {
        return Prereq::ClassLevel(ClassLevel {
            class: first_word(&text),
            level: after_last_space(&text),
        });
    }

    // 6. Class levels recognized by link target ("Gunslinger 1st" etc.)
    if link_category.as_deref() == Some("classes") {
        return Prereq::ClassLevel(ClassLevel {
            class: s!(anchor),
            level: after_last_space(&text),
        });
    }

    // 7. Skill ranks
    for rule in SKILLS {
        let matched = match rule.case {
            Case::Exact => text.starts_with(rule.prefix),
            Case::Insensitive => lower.starts_with(rule.prefix),
        };
        if matched {
            return (rule.build)(rank_value(&text));
        }
    }
    if text.starts_with("Knowledge ") {
        for (topic, build) in KNOWLEDGE {
            if lower.contains(topic) {
                return build(rank_value(&text));
            }
        }
    }

    // 8. Feats recognized by link target
    if link_category.as_deref() == Some("feats") {
        return Prereq::Feat(s!(anchor));
    }

    // 9. "… feat" spelled out
    if lower.ends_with(" feat") {
        return Prereq::Feat(s!(text[..text.len() - " feat".len()].trim_end()));
    }

    // 10. Races (monstrous ones link into the bestiary)
    if matches!(link_category.as_deref(), Some("races") | Some("bestiary")) {
        return Prereq::Race(text);
    }

    // 11. Catch-all
    Prereq::Special(text)
}

/// Path segment right after the site root, e.g. "classes" for
/// https://www.d20pfsrd.com/classes/core-classes/fighter.
fn site_category(link: &Hyperlink) -> Option<String> {
    let i = link.href.find("d20pfsrd.com/")?;
    let rest = &link.href[i + "d20pfsrd.com/".len()..];
    let seg = rest.split('/').next().filter(|s| !s.is_empty())?;
    Some(s!(seg))
}

struct AbilityRule {
    abbrev: &'static str,
    full: &'static str,
    build: fn(String) -> Prereq,
}

const ABILITIES: &[AbilityRule] = &[
    AbilityRule { abbrev: "str ", full: "strength ", build: Prereq::Str },
    AbilityRule { abbrev: "dex ", full: "dexterity ", build: Prereq::Dex },
    AbilityRule { abbrev: "con ", full: "constitution ", build: Prereq::Con },
    AbilityRule { abbrev: "int ", full: "intelligence ", build: Prereq::Int },
    AbilityRule { abbrev: "wis ", full: "wisdom ", build: Prereq::Wis },
    AbilityRule { abbrev: "cha ", full: "charisma ", build: Prereq::Cha },
];

enum Case {
    /// Proper-noun prefix, matched exactly
    Exact,
    /// Multi-word prefix the source text often lowercases mid-sentence
    Insensitive,
}

struct SkillRule {
    prefix: &'static str,
    case: Case,
    build: fn(String) -> Prereq,
}

// Insensitive prefixes are written lowercase; they are matched against the
// lowercased clause.
const SKILLS: &[SkillRule] = &[
    SkillRule { prefix: "Acrobatics ", case: Case::Exact, build: Prereq::Acrobatics },
    SkillRule { prefix: "Appraise ", case: Case::Exact, build: Prereq::Appraise },
    SkillRule { prefix: "Bluff ", case: Case::Exact, build: Prereq::Bluff },
    SkillRule { prefix: "Climb ", case: Case::Exact, build: Prereq::Climb },
    SkillRule { prefix: "Craft ", case: Case::Exact, build: Prereq::Craft },
    SkillRule { prefix: "Diplomacy ", case: Case::Exact, build: Prereq::Diplomacy },
    SkillRule { prefix: "disable device ", case: Case::Insensitive, build: Prereq::DisableDevice },
    SkillRule { prefix: "Disguise ", case: Case::Exact, build: Prereq::Disguise },
    SkillRule { prefix: "escape artist ", case: Case::Insensitive, build: Prereq::EscapeArtist },
    SkillRule { prefix: "Fly ", case: Case::Exact, build: Prereq::Fly },
    SkillRule { prefix: "handle animal ", case: Case::Insensitive, build: Prereq::HandleAnimal },
    SkillRule { prefix: "Heal ", case: Case::Exact, build: Prereq::Heal },
    SkillRule { prefix: "Intimidate ", case: Case::Exact, build: Prereq::Intimidate },
    SkillRule { prefix: "Linguistics ", case: Case::Exact, build: Prereq::Linguistics },
    SkillRule { prefix: "Perception ", case: Case::Exact, build: Prereq::Perception },
    SkillRule { prefix: "Perform ", case: Case::Exact, build: Prereq::Perform },
    SkillRule { prefix: "Profession ", case: Case::Exact, build: Prereq::Profession },
    SkillRule { prefix: "Ride ", case: Case::Exact, build: Prereq::Ride },
    SkillRule { prefix: "sense motive ", case: Case::Insensitive, build: Prereq::SenseMotive },
    SkillRule { prefix: "sleight of hand ", case: Case::Insensitive, build: Prereq::SleightOfHand },
    SkillRule { prefix: "Spellcraft ", case: Case::Exact, build: Prereq::Spellcraft },
    SkillRule { prefix: "Stealth ", case: Case::Exact, build: Prereq::Stealth },
    SkillRule { prefix: "Survival ", case: Case::Exact, build: Prereq::Survival },
    SkillRule { prefix: "Swim ", case: Case::Exact, build: Prereq::Swim },
    SkillRule { prefix: "use magic device ", case: Case::Insensitive, build: Prereq::UseMagicDevice },
];

// "Knowledge (arcana) 5 ranks", "Knowledge: the planes 7 ranks", … — prefix
// plus a topic keyword anywhere in the clause.
const KNOWLEDGE: &[(&str, fn(String) -> Prereq)] = &[
    ("arcana", Prereq::KnowledgeArcana),
    ("dungeoneering", Prereq::KnowledgeDungeoneering),
    ("engineering", Prereq::KnowledgeEngineering),
    ("geography", Prereq::KnowledgeGeography),
    ("history", Prereq::KnowledgeHistory),
    ("local", Prereq::KnowledgeLocal),
    ("nature", Prereq::KnowledgeNature),
    ("nobility", Prereq::KnowledgeNobility),
    ("planes", Prereq::KnowledgePlanes),
    ("religion", Prereq::KnowledgeReligion),
];

/// Shared skill-value extraction: drop an optional " ranks"/" rank" suffix,
/// then take what follows the last remaining space.
fn rank_value(text: &str) -> String {
    let mut t = text;
    if let Some(stripped) = t.strip_suffix(" ranks") {
        t = stripped;
    } else if let Some(stripped) = t.strip_suffix(" rank") {
        t = stripped;
    }
    after_last_space(t)
}

fn first_word(s: &str) -> String {
    s!(s.split(' ').next().unwrap_or(s))
}

fn after_first_space(s: &str) -> String {
    match s.find(' ') {
        Some(i) => s!(&s[i + 1..]),
        None => s!(s),
    }
}

fn after_last_space(s: &str) -> String {
    match s.rfind(' ') {
        Some(i) => s!(&s[i + 1..]),
        None => s!(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_scores_abbreviated_and_spelled_out() {
        assert_eq!(classify("Str 13"), Prereq::Str(s!("13")));
        assert_eq!(classify("Dexterity 15"), Prereq::Dex(s!("15")));
        assert_eq!(classify("cha 19"), Prereq::Cha(s!("19")));
        assert_eq!(classify("Int 13"), Prereq::Int(s!("13")));
        assert_eq!(classify("Wis 17"), Prereq::Wis(s!("17")));
        assert_eq!(classify("Constitution 14"), Prereq::Con(s!("14")));
    }

    #[test]
    fn base_attack_bonus_takes_tail_after_last_space() {
        assert_eq!(classify("base attack bonus +6"), Prereq::Bab(s!("+6")));
        assert_eq!(classify("Base attack bonus +1"), Prereq::Bab(s!("+1")));
        assert_eq!(classify("BAB +11"), Prereq::Bab(s!("+11")));
    }

    #[test]
    fn caster_level_variants() {
        assert_eq!(classify("caster level 5th"), Prereq::CasterLevel(s!("5th")));
        assert_eq!(classify("Caster level 7th"), Prereq::CasterLevel(s!("7th")));
    }

    #[test]
    fn character_level_is_a_pseudo_class() {
        assert_eq!(
            classify("character level 5th"),
            Prereq::ClassLevel(ClassLevel { class: s!("character"), level: s!("5th") })
        );
    }

    #[test]
    fn class_feature_suffix() {
        assert_eq!(
            classify("sneak attack class feature"),
            Prereq::ClassFeature(s!("sneak attack"))
        );
        assert_eq!(
            classify("Channel Energy class feature"),
            Prereq::ClassFeature(s!("Channel Energy"))
        );
    }

    #[test]
    fn class_link_beats_skill_word() {
        // "Gunslinger 1st" carries no textual hint; the link decides
        let raw = r#"<a href="https://www.d20pfsrd.com/classes/base-classes/gunslinger">Gunslinger</a> 1st"#;
        assert_eq!(
            classify(raw),
            Prereq::ClassLevel(ClassLevel { class: s!("Gunslinger"), level: s!("1st") })
        );
    }

    #[test]
    fn skill_ranks_strip_suffix() {
        assert_eq!(classify("Stealth 5 ranks"), Prereq::Stealth(s!("5")));
        assert_eq!(classify("Stealth 5 rank"), Prereq::Stealth(s!("5")));
        assert_eq!(classify("Stealth 5"), Prereq::Stealth(s!("5")));
        assert_eq!(classify("Acrobatics 3 ranks"), Prereq::Acrobatics(s!("3")));
        assert_eq!(classify("Craft (armor) 5 ranks"), Prereq::Craft(s!("5")));
    }

    #[test]
    fn multiword_skills_match_case_insensitively() {
        assert_eq!(classify("sleight of hand 4 ranks"), Prereq::SleightOfHand(s!("4")));
        assert_eq!(classify("Sleight of Hand 4 ranks"), Prereq::SleightOfHand(s!("4")));
        assert_eq!(classify("use magic device 6 ranks"), Prereq::UseMagicDevice(s!("6")));
        assert_eq!(classify("Disable Device 3 ranks"), Prereq::DisableDevice(s!("3")));
        assert_eq!(classify("Handle Animal 1 rank"), Prereq::HandleAnimal(s!("1")));
        assert_eq!(classify("Sense Motive 5 ranks"), Prereq::SenseMotive(s!("5")));
        assert_eq!(classify("Escape Artist 5 ranks"), Prereq::EscapeArtist(s!("5")));
    }

    #[test]
    fn proper_noun_skills_are_case_sensitive() {
        // lowercase "stealth" is not the skill header form
        assert_eq!(classify("stealth 5 ranks"), Prereq::Special(s!("stealth 5 ranks")));
    }

    #[test]
    fn knowledge_topics_dispatch_by_keyword() {
        assert_eq!(classify("Knowledge (arcana) 5 ranks"), Prereq::KnowledgeArcana(s!("5")));
        assert_eq!(classify("Knowledge (planes) 7 ranks"), Prereq::KnowledgePlanes(s!("7")));
        assert_eq!(classify("Knowledge (religion) 1 rank"), Prereq::KnowledgeReligion(s!("1")));
        assert_eq!(classify("Knowledge (nature) 2 ranks"), Prereq::KnowledgeNature(s!("2")));
        assert_eq!(
            classify("Knowledge (dungeoneering) 3 ranks"),
            Prereq::KnowledgeDungeoneering(s!("3"))
        );
    }

    #[test]
    fn unknown_knowledge_topic_falls_through() {
        assert_eq!(
            classify("Knowledge (astronomy) 5 ranks"),
            Prereq::Special(s!("Knowledge (astronomy) 5 ranks"))
        );
    }

    #[test]
    fn feat_by_link_uses_anchor_text() {
        let raw = r#"<a href="https://www.d20pfsrd.com/feats/combat-feats/power-attack-combat-final">Power Attack</a>"#;
        assert_eq!(classify(raw), Prereq::Feat(s!("Power Attack")));
    }

    #[test]
    fn feat_by_suffix() {
        assert_eq!(classify("any critical feat"), Prereq::Feat(s!("any critical")));
    }

    #[test]
    fn race_by_link_keeps_full_text() {
        let raw = r#"<a href="https://www.d20pfsrd.com/races/core-races/dwarf">dwarf</a>"#;
        assert_eq!(classify(raw), Prereq::Race(s!("dwarf")));
        let raw = r#"<a href="https://www.d20pfsrd.com/bestiary/monster-listings/outsiders/tiefling">tiefling</a>"#;
        assert_eq!(classify(raw), Prereq::Race(s!("tiefling")));
    }

    #[test]
    fn catch_all_keeps_text_verbatim() {
        assert_eq!(
            classify("ability to cast 2nd-level spells"),
            Prereq::Special(s!("ability to cast 2nd-level spells"))
        );
    }

    #[test]
    fn totality_on_odd_inputs() {
        // Anything non-empty classifies to exactly one entry, never panics
        for odd in ["x", "—", "   spaced   out   ", "<i>markup only</i>", "or"] {
            let _ = classify(odd);
        }
    }

    #[test]
    fn site_category_extraction() {
        let link = |href: &str| Hyperlink { href: s!(href), anchor: s!() };
        assert_eq!(
            site_category(&link("https://www.d20pfsrd.com/classes/core-classes/fighter")).as_deref(),
            Some("classes")
        );
        assert_eq!(
            site_category(&link("https://www.d20pfsrd.com/feats/x")).as_deref(),
            Some("feats")
        );
        assert_eq!(site_category(&link("https://elsewhere.example/feats/x")), None);
    }
}
