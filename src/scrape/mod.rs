// src/scrape/mod.rs
//! Page-specific extraction for d20pfsrd. `categories` knows where feat
//! links live; `feat_page` turns one feat page into a `FeatRecord`.
//! Everything here scans locally within known blocks via `core::html`;
//! fetching is `core::net`, orchestration is `runner`.

pub mod categories;
pub mod feat_page;

pub use categories::{harvest_links, Category, LinkSource, CATEGORIES};
pub use feat_page::fetch_feat;
