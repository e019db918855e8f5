// tests/run_from_file.rs
//
// The whole run through `runner::run`, reading the saved page instead of the
// live site. Flag downloads are off, so nothing touches the network.
//
use std::fs;
use std::path::PathBuf;

use country_cards::config::options::{AppOptions, AssetPolicy};
use country_cards::file::load_json;
use country_cards::runner::run;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/country_codes.html")
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("country_cards_run_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn offline_opts(dir: PathBuf, page: PathBuf) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.from_file = Some(page);
    opts.assets.policy = AssetPolicy::Never;
    opts.output.dir = dir;
    opts
}

#[test]
fn saved_page_runs_end_to_end() {
    let dir = tmp_dir("saved_page");
    let opts = offline_opts(dir.clone(), fixture());

    let summary = run(&opts, None).unwrap();

    assert_eq!(summary.records, 6);
    assert_eq!(summary.assets.skipped, 6);
    assert_eq!(summary.assets.fetched, 0);
    assert!(!opts.flags_dir().exists());

    assert_eq!(summary.json, dir.join("countries.json"));
    let records = load_json(&summary.json).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[2].get("Country"), Some("Andorra"));
    assert_eq!(records[2].get("Numeric"), Some("020"));

    assert_eq!(summary.decks.len(), 2);
    assert_eq!(summary.decks[0].path, dir.join("flag_cards.apkg"));
    assert_eq!(summary.decks[1].path, dir.join("iso3166.apkg"));
    for deck in &summary.decks {
        assert_eq!((deck.notes, deck.media), (6, 0));
        assert!(fs::metadata(&deck.path).unwrap().len() > 0);
    }
}

#[test]
fn missing_page_file_is_an_error_naming_the_path() {
    let dir = tmp_dir("missing_page");
    let page = dir.join("typo.html");
    let opts = offline_opts(dir.clone(), page);

    let err = run(&opts, None).unwrap_err();

    assert!(err.to_string().contains("typo.html"), "{err}");
    assert!(!dir.join("countries.json").exists());
    assert!(!dir.join("flag_cards.apkg").exists());
}
