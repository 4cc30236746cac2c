// src/scrape/categories.rs
//
// The site publishes feats in three shapes: category pages with link
// tables, category pages whose feats are child pages, and four categories
// that only exist as anchored sections on the feats index. The catalog
// below is fixed; new categories mean a new release.

use std::error::Error;

use crate::config::consts::{FEATS_BASE, FEATS_INDEX};
use crate::core::html::{links_in, next_elem_block_ci, next_tag_block_ci, slice_between_ci, to_lower};
use crate::core::net::get_page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// Feat links sit in `<table>` rows on the category page
    Tables,
    /// Feat pages are children listed in an `ogn-childpages` list
    Subpages,
    /// No category page; an anchored section on the feats index
    IndexSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub source: LinkSource,
    /// Page URL for Tables/Subpages, span id for IndexSection
    pub target: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Achievement", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/achievement-feats" },
    Category { name: "Animal_Companion", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/animal-companion-feats/" },
    Category { name: "Animal_Familiar", source: LinkSource::IndexSection, target: "AnimalFamiliar_Feats" },
    Category { name: "Blood_Hex", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/general-feats/blood-hex" },
    Category { name: "Combat", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/combat-feats" },
    Category { name: "Conduit", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/conduit-feats" },
    Category { name: "Critical", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/combat-feats/critical-feats/" },
    Category { name: "Damnation", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/damnation-feats" },
    Category { name: "Faction", source: LinkSource::IndexSection, target: "Faction_Feats" },
    Category { name: "General", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/general-feats" },
    Category { name: "Grit", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/grit-feats" },
    Category { name: "Hero_Point", source: LinkSource::IndexSection, target: "Hero_Point_Feats" },
    Category { name: "Item_Creation", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/item-creation-feats" },
    Category { name: "Item_Mastery", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/item-mastery-feats" },
    Category { name: "Meditation", source: LinkSource::IndexSection, target: "Meditation_Feats" },
    Category { name: "Metamagic", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/metamagic-feats" },
    Category { name: "Monster", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/monster-feats" },
    Category { name: "Mythic", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/alternative-rule-systems/mythic/mythic-feats/" },
    Category { name: "Panache", source: LinkSource::Subpages, target: "https://www.d20pfsrd.com/feats/panache-feats" },
    Category { name: "Performance", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/performance-feats" },
    Category { name: "Racial", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/racial-feats" },
    // Stare feats share the racial feats page
    Category { name: "Stare", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/racial-feats" },
    Category { name: "Story", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/story-feats" },
    Category { name: "Style", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/style-feats" },
    Category { name: "Teamwork", source: LinkSource::Tables, target: "https://www.d20pfsrd.com/feats/teamwork-feats" },
];

pub fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Fetch the category's page and return the feat links it publishes,
/// in page order.
pub fn harvest_links(cat: &Category) -> Result<Vec<String>, Box<dyn Error>> {
    match cat.source {
        LinkSource::Tables => {
            let doc = get_page(cat.target)?;
            Ok(table_links(&doc))
        }
        LinkSource::Subpages => {
            let doc = get_page(cat.target)?;
            Ok(subpage_links(&doc))
        }
        LinkSource::IndexSection => {
            let doc = get_page(FEATS_INDEX)?;
            Ok(index_section_links(&doc, cat.target))
        }
    }
}

fn article_content(doc: &str) -> &str {
    slice_between_ci(doc, r#"class="article-content""#, "</article>").unwrap_or(doc)
}

/// Feat links from the category page's tables: first link of each row.
/// Pages with a legend ("divider") paragraph put a non-feat legend table
/// first; skip it.
pub fn table_links(doc: &str) -> Vec<String> {
    let content = article_content(doc);
    let mut links = Vec::new();

    let mut pos = 0usize;
    let mut table_idx = 0usize;
    let skip_first = to_lower(content).contains(r#"class="divider""#);

    while let Some((t_s, t_e)) = next_elem_block_ci(content, "table", pos) {
        let table = &content[t_s..t_e];
        pos = t_e;
        table_idx += 1;
        if skip_first && table_idx == 1 {
            continue;
        }

        let mut tr_pos = 0usize;
        while let Some((tr_s, tr_e)) = next_elem_block_ci(table, "tr", tr_pos) {
            let row = &table[tr_s..tr_e];
            tr_pos = tr_e;
            if let Some(link) = links_in(row).into_iter().next() {
                links.push(absolutize(&link.href));
            }
        }
    }
    links
}

/// Feat links from an `ogn-childpages` child-page list.
pub fn subpage_links(doc: &str) -> Vec<String> {
    match next_tag_block_ci(doc, r#"<ul class="ogn-childpages""#, "</ul>", 0) {
        Some((s, e)) => links_in(&doc[s..e])
            .into_iter()
            .map(|l| absolutize(&l.href))
            .collect(),
        None => Vec::new(),
    }
}

/// Feat links from an anchored section of the feats index: everything from
/// the section's span anchor to the next section header.
pub fn index_section_links(doc: &str, span_id: &str) -> Vec<String> {
    let content = article_content(doc);
    let lc = to_lower(content);
    let anchor = to_lower(&format!(r#"id="{}""#, span_id));
    let start = match lc.find(&anchor) {
        Some(i) => i,
        None => return Vec::new(),
    };
    let end = lc[start..]
        .find("<h4")
        .map(|i| start + i)
        .unwrap_or(content.len());
    links_in(&content[start..end])
        .into_iter()
        .map(|l| absolutize(&l.href))
        .collect()
}

fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        s!(href)
    } else {
        join!(FEATS_BASE, href.trim_start_matches('/'))
    }
}
