// src/scrape/feat_page.rs
//
// One feat page → one FeatRecord. Pulls the <article> apart into title,
// description, source attribution and the labeled paragraph stream, then
// hands the stream to the field classifier and the Prerequisites bucket to
// the prerequisite pipeline.

use std::error::Error;

use crate::core::html::{
    bold_lead_in, first_link, inner_after_open_tag, next_elem_block_ci, strip_tags,
};
use crate::core::net::get_page;
use crate::core::sanitize::normalize_entities;
use crate::fields;
use crate::model::{ContentFragment, FeatRecord};
use crate::prereq;

pub fn fetch_feat(link: &str, category: &str) -> Result<FeatRecord, Box<dyn Error>> {
    let doc = get_page(link)?;
    extract(&doc, link, category)
}

/// Pure extraction over an already-fetched document; testable offline.
pub fn extract(doc: &str, link: &str, category: &str) -> Result<FeatRecord, Box<dyn Error>> {
    let (a_s, a_e) = next_elem_block_ci(doc, "article", 0).ok_or("article not found")?;
    let mut article = inner_after_open_tag(&doc[a_s..a_e]);

    let title = next_elem_block_ci(&article, "h1", 0)
        .map(|(s, e)| strip_tags(normalize_entities(&inner_after_open_tag(&article[s..e]))))
        .ok_or("feat title not found")?;
    // Slashed names collide with the per-feat file layout
    let name = title.replace('/', ", ");

    let description = cut_block(&mut article, r#"class="description""#)
        .map(|block| strip_tags(normalize_entities(&inner_after_open_tag(&block))))
        .unwrap_or_default();

    let (source, source_link) = match cut_block(&mut article, r#"class="section15""#) {
        Some(block) => source_attribution(&block),
        None => (s!(), s!()),
    };

    let fragments = paragraph_fragments(&article);
    let buckets = fields::classify_fields(&fragments);
    let prerequisites = match &buckets.prerequisites {
        Some(raw) => prereq::parse_prerequisites(raw),
        None => Vec::new(),
    };

    Ok(FeatRecord {
        name,
        feat_type: s!(category),
        link: s!(link),
        description,
        source,
        source_link,
        prerequisites,
        benefit: buckets.benefit,
        normal: buckets.normal,
        special: buckets.special,
    })
}

/// Remove the first tag block whose opening tag matches `attr_pat` and
/// return it. The block must not outlive the pass, so it is cut out of the
/// article the way the source site's markup expects (description and
/// section15 never nest).
fn cut_block(article: &mut String, attr_pat: &str) -> Option<String> {
    let open_start = {
        let lc = crate::core::html::to_lower(article);
        lc.find(&crate::core::html::to_lower(attr_pat))?
    };
    // Back up to the '<' that opens this tag, then take the whole element
    let tag_start = article[..open_start].rfind('<')?;
    let tag_name: String = article[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    let (b_s, b_e) = next_elem_block_ci(article, &tag_name, tag_start)?;
    let block = article[b_s..b_e].to_string();
    article.replace_range(b_s..b_e, "");
    Some(block)
}

/// "Source <a href=…>PPC:Something</a>" → (anchor text, href); without a
/// link the first word after "Source" has to do.
fn source_attribution(block: &str) -> (String, String) {
    match first_link(block) {
        Some(link) => (link.anchor, link.href),
        None => {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
            let first = text.split(' ').next().unwrap_or("");
            (s!(first), s!())
        }
    }
}

/// The ordered `<p>` stream of the article, each split into optional bold
/// lead-in and body.
fn paragraph_fragments(article: &str) -> Vec<ContentFragment> {
    let mut fragments = Vec::new();
    let mut pos = 0usize;
    while let Some((p_s, p_e)) = next_elem_block_ci(article, "p", pos) {
        let inner = inner_after_open_tag(&article[p_s..p_e]);
        pos = p_e;
        match bold_lead_in(&inner) {
            Some((lead, body)) => fragments.push(ContentFragment {
                lead_in: Some(lead),
                body,
            }),
            None => fragments.push(ContentFragment {
                lead_in: None,
                body: inner,
            }),
        }
    }
    fragments
}
