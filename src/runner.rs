// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::{FLAG_DECK_ID, FLAG_DECK_NAME, ISO_DECK_ID, ISO_DECK_NAME},
    config::options::AppOptions,
    core::net::Http,
    deck::{self, DeckReport, models},
    file::write_json,
    flags::{self, AssetReport, FlagSource, HttpFlags},
    progress::{NullProgress, Progress},
    specs,
    store::CountryDataset,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub json: PathBuf,
    pub assets: AssetReport,
    pub decks: Vec<DeckReport>,
}

/// Top-level runner: fetch page, parse table, then [`process`].
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let http = Http::new(&opts.fetch)?;

    progress.log("Fetching country codes…");
    let dataset = specs::country_codes::fetch(&opts.fetch, &http)?;

    let source = HttpFlags::new(&http, &opts.fetch);
    process(opts, &dataset, &source, progress)
}

/// Everything after parsing: flags, JSON dump, decks. In that order, once.
pub fn process(
    opts: &AppOptions,
    dataset: &CountryDataset,
    source: &dyn FlagSource,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    progress.log(&format!("{} countries, downloading flags…", dataset.len()));
    let flags_dir = opts.flags_dir();
    let assets = flags::download_flags(dataset, &opts.assets, &flags_dir, source, progress)?;
    logf!(
        "flags: {} fetched, {} skipped, {} failed",
        assets.fetched, assets.skipped, assets.failed
    );

    let json = opts.output.json_path();
    write_json(&json, dataset)?;
    progress.log(&format!("Wrote {}", json.display()));

    let mut decks = Vec::new();
    if opts.output.write_decks {
        let name_column = opts.assets.name_column;

        let notes = deck::flag_notes(dataset, name_column)?;
        let media = deck::flag_media(dataset, &flags_dir, name_column);
        decks.push(deck::write_deck(
            &opts.output.flag_deck_path(),
            FLAG_DECK_ID,
            FLAG_DECK_NAME,
            &models::flag_model(),
            &notes,
            &media,
        )?);

        let notes = deck::iso_notes(dataset)?;
        decks.push(deck::write_deck(
            &opts.output.iso_deck_path(),
            ISO_DECK_ID,
            ISO_DECK_NAME,
            &models::iso_model(),
            &notes,
            &[],
        )?);

        for d in &decks {
            progress.log(&format!("Wrote {} ({} notes)", d.path.display(), d.notes));
        }
    }

    progress.finish();

    Ok(RunSummary { records: dataset.len(), json, assets, decks })
}
