// tests/feat_extract.rs
//
// Offline extraction over captured-style page markup: article → FeatRecord,
// including the JSON wire shape downstream tooling reads.

use pfsrd_scrape::model::Prereq;
use pfsrd_scrape::scrape::feat_page::extract;

const STORY_PAGE: &str = r#"
    <html><body>
    <article>
      <h1>Example Oath</h1>
      <div class="article-content">
        <div class="section15">Source <a href="https://www.d20pfsrd.com/sources/uc">UC</a></div>
        <p><b>Prerequisites:</b> Evasive demeanor, or Fearless disposition.</p>
        <p><b>Benefit</b>: You shrug off fear effects.</p>
        <p><b>Goal</b>: Defeat a dragon singlehanded.</p>
        <p><b>Special</b>: Completing the goal doubles the benefit.</p>
        <p>The doubled benefit persists.</p>
      </div>
    </article>
    </body></html>
"#;

#[test]
fn sticky_labels_and_ad_hoc_headers() {
    let record = extract(STORY_PAGE, "https://www.d20pfsrd.com/feats/story/x", "Story").unwrap();

    assert_eq!(record.name, "Example Oath");
    assert_eq!(record.benefit, "You shrug off fear effects.");
    // "Goal" is an ad-hoc header; it and everything after the Special
    // header (labeled or carried forward) lands in the Special bucket.
    assert_eq!(
        record.special,
        "Defeat a dragon singlehanded. Completing the goal doubles the benefit. The doubled benefit persists."
    );
}

#[test]
fn unresolved_prerequisites_collapse_in_the_record() {
    let record = extract(STORY_PAGE, "link", "Story").unwrap();
    assert_eq!(
        record.prerequisites,
        vec![Prereq::Special("Evasive demeanor, Fearless disposition".into())]
    );
}

#[test]
fn record_serializes_with_original_wire_names() {
    let record = extract(STORY_PAGE, "https://www.d20pfsrd.com/feats/story/x", "Story").unwrap();
    let v = serde_json::to_value(&record).unwrap();

    assert_eq!(v["Name"], "Example Oath");
    assert_eq!(v["Type"], "Story");
    assert_eq!(v["Link"], "https://www.d20pfsrd.com/feats/story/x");
    assert_eq!(v["Source"], "UC");
    assert_eq!(v["SourceLink"], "https://www.d20pfsrd.com/sources/uc");
    assert_eq!(
        v["Prerequisites"],
        serde_json::json!([
            { "SpecialPrerequisite": "Evasive demeanor, Fearless disposition" }
        ])
    );
}

#[test]
fn typed_prerequisites_serialize_structured() {
    let page = r#"
        <article>
          <h1>Cleaving Example</h1>
          <p><b>Prerequisites</b>: Str 13, <a href="https://www.d20pfsrd.com/feats/combat-feats/power-attack">Power Attack</a>, base attack bonus +1.</p>
          <p><b>Benefit</b>: You cleave.</p>
        </article>
    "#;
    let record = extract(page, "l", "Combat").unwrap();
    let v = serde_json::to_value(&record).unwrap();
    assert_eq!(
        v["Prerequisites"],
        serde_json::json!([
            { "StrPrerequisite": "13" },
            { "FeatPrerequisite": "Power Attack" },
            { "BabPrerequisite": "+1" }
        ])
    );
}
