// src/model.rs
//
// Core data model for one scraped feat. Serialization uses the wire names
// the downstream tooling already consumes ("StrPrerequisite",
// "MultiPrerequisite", "Name"/"Type"/"Link" casing), so output files stay
// drop-in compatible.

use serde::Serialize;

pub use crate::core::html::Hyperlink;

/// One paragraph-equivalent unit handed over by the page layer. The bold
/// lead-in (if any) is already separated from the body; the body keeps its
/// raw markup so hyperlinks survive into prerequisite tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFragment {
    pub lead_in: Option<String>,
    pub body: String,
}

impl ContentFragment {
    pub fn labeled(lead_in: &str, body: &str) -> Self {
        Self { lead_in: Some(s!(lead_in)), body: s!(body) }
    }
    pub fn unlabeled(body: &str) -> Self {
        Self { lead_in: None, body: s!(body) }
    }
}

/// Semantic role of a fragment within a feat article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    Description,
    Prerequisites,
    Benefit,
    Normal,
    Special,
    Unlabeled,
}

/// Class + level pair for class-level prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLevel {
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Level")]
    pub level: String,
}

/// One typed prerequisite. Classification is total: anything that matches no
/// concrete rule lands in `Special`, so every clause maps to exactly one
/// entry. `Either` always holds exactly two alternatives and is never
/// nested; the tokenizer only ever pairs adjacent clauses.
///
/// Numeric values stay strings; no arithmetic happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Prereq {
    #[serde(rename = "ClassFeaturePrerequisite")]
    ClassFeature(String),
    #[serde(rename = "StrPrerequisite")]
    Str(String),
    #[serde(rename = "DexPrerequisite")]
    Dex(String),
    #[serde(rename = "ConPrerequisite")]
    Con(String),
    #[serde(rename = "IntPrerequisite")]
    Int(String),
    #[serde(rename = "WisPrerequisite")]
    Wis(String),
    #[serde(rename = "ChaPrerequisite")]
    Cha(String),
    #[serde(rename = "BabPrerequisite")]
    Bab(String),
    #[serde(rename = "CasterLvlPrerequisite")]
    CasterLevel(String),
    #[serde(rename = "ClassLvlPrerequisite")]
    ClassLevel(ClassLevel),
    #[serde(rename = "AcrobaticsPrerequisite")]
    Acrobatics(String),
    #[serde(rename = "AppraisePrerequisite")]
    Appraise(String),
    #[serde(rename = "BluffPrerequisite")]
    Bluff(String),
    #[serde(rename = "ClimbPrerequisite")]
    Climb(String),
    #[serde(rename = "CraftPrerequisite")]
    Craft(String),
    #[serde(rename = "DiplomacyPrerequisite")]
    Diplomacy(String),
    #[serde(rename = "DisableDevicePrerequisite")]
    DisableDevice(String),
    #[serde(rename = "DisguisePrerequisite")]
    Disguise(String),
    #[serde(rename = "EscapeArtistPrerequisite")]
    EscapeArtist(String),
    #[serde(rename = "FlyPrerequisite")]
    Fly(String),
    #[serde(rename = "HandleAnimalPrerequisite")]
    HandleAnimal(String),
    #[serde(rename = "HealPrerequisite")]
    Heal(String),
    #[serde(rename = "IntimidatePrerequisite")]
    Intimidate(String),
    #[serde(rename = "KnowledgeArcanaPrerequisite")]
    KnowledgeArcana(String),
    #[serde(rename = "KnowledgeDungeoneeringPrerequisite")]
    KnowledgeDungeoneering(String),
    #[serde(rename = "KnowledgeEngineeringPrerequisite")]
    KnowledgeEngineering(String),
    #[serde(rename = "KnowledgeGeographyPrerequisite")]
    KnowledgeGeography(String),
    #[serde(rename = "KnowledgeHistoryPrerequisite")]
    KnowledgeHistory(String),
    #[serde(rename = "KnowledgeLocalPrerequisite")]
    KnowledgeLocal(String),
    #[serde(rename = "KnowledgeNaturePrerequisite")]
    KnowledgeNature(String),
    #[serde(rename = "KnowledgeNobilityPrerequisite")]
    KnowledgeNobility(String),
    #[serde(rename = "KnowledgePlanesPrerequisite")]
    KnowledgePlanes(String),
    #[serde(rename = "KnowledgeReligionPrerequisite")]
    KnowledgeReligion(String),
    #[serde(rename = "LinguisticsPrerequisite")]
    Linguistics(String),
    #[serde(rename = "PerceptionPrerequisite")]
    Perception(String),
    #[serde(rename = "PerformPrerequisite")]
    Perform(String),
    #[serde(rename = "ProfessionPrerequisite")]
    Profession(String),
    #[serde(rename = "RidePrerequisite")]
    Ride(String),
    #[serde(rename = "SenseMotivePrerequisite")]
    SenseMotive(String),
    #[serde(rename = "SleightOfHandPrerequisite")]
    SleightOfHand(String),
    #[serde(rename = "SpellcraftPrerequisite")]
    Spellcraft(String),
    #[serde(rename = "StealthPrerequisite")]
    Stealth(String),
    #[serde(rename = "SurvivalPrerequisite")]
    Survival(String),
    #[serde(rename = "SwimPrerequisite")]
    Swim(String),
    #[serde(rename = "UseMagicDevicePrerequisite")]
    UseMagicDevice(String),
    #[serde(rename = "FeatPrerequisite")]
    Feat(String),
    #[serde(rename = "RacePrerequisite")]
    Race(String),
    #[serde(rename = "SpecialPrerequisite")]
    Special(String),
    #[serde(rename = "MultiPrerequisite")]
    Either(Box<Prereq>, Box<Prereq>),
}

impl Prereq {
    pub fn is_special(&self) -> bool {
        matches!(self, Prereq::Special(_))
    }
}

/// The finished record for one feat page. This is the only entity that
/// outlives page processing; everything else is transient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub feat_type: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "SourceLink")]
    pub source_link: String,
    #[serde(rename = "Prerequisites")]
    pub prerequisites: Vec<Prereq>,
    #[serde(rename = "Benefit")]
    pub benefit: String,
    #[serde(rename = "Normal")]
    pub normal: String,
    #[serde(rename = "Special")]
    pub special: String,
}
