// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{CategorySelector, ExportOptions, ScrapeOptions};
use crate::progress::ConsoleProgress;
use crate::runner;
use crate::scrape::CATEGORIES;

pub struct Args {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub list_categories: bool,
}

impl Args {
    fn new() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
            list_categories: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli()?;

    if args.list_categories {
        for cat in CATEGORIES {
            println!("{}", cat.name);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::new("Grabbing feats");
    let report = runner::run(&args.scrape, &args.export, Some(&mut progress))?;

    println!("Wrote {} feats to {}", report.written, args.export.out_dir.display());
    if !report.broken_links.is_empty() {
        println!("Here's a list of links that could not be reached:");
        for link in &report.broken_links {
            println!("{link}");
        }
    }
    Ok(())
}

fn parse_cli() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::new();

    let mut it = env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "-c" | "--category" => {
                let v = it.next().ok_or("Missing value for --category")?;
                args.scrape.categories = CategorySelector::Named(parse_name_list(&v));
            }
            "--list-categories" => args.list_categories = true,
            "--all" | "-a" => args.scrape.categories = CategorySelector::All,
            "--limit" => {
                let v: usize = it.next().ok_or("Missing value for --limit")?.parse()?;
                args.scrape.limit = Some(v);
            }
            "-o" | "--out" => {
                args.export.out_dir =
                    PathBuf::from(it.next().ok_or("Missing output path")?);
            }
            "--pretty" => args.export.pretty = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(args)
}

fn parse_name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| s!(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_list_splits_and_trims() {
        assert_eq!(
            parse_name_list("Combat, mythic ,,General"),
            vec![s!("Combat"), s!("mythic"), s!("General")]
        );
    }
}
