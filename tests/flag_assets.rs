// tests/flag_assets.rs
//
// Flag download policy against a counting fake source; no network.
//
use std::cell::RefCell;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use country_cards::config::options::{AssetOptions, AssetPolicy};
use country_cards::flags::{download_flags, AssetReport, FlagSource};
use country_cards::progress::NullProgress;
use country_cards::specs::country_codes::parse_table;
use country_cards::store::CountryDataset;

const FIXTURE: &str = include_str!("fixtures/country_codes.html");

/// Serves `<svg>CODE</svg>` for every code except those in `fail`.
struct FakeFlags {
    fail: Vec<&'static str>,
    requests: RefCell<Vec<String>>,
}

impl FakeFlags {
    fn new(fail: &[&'static str]) -> Self {
        Self { fail: fail.to_vec(), requests: RefCell::new(Vec::new()) }
    }

    fn count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl FlagSource for FakeFlags {
    fn fetch_flag(&self, code: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        self.requests.borrow_mut().push(code.to_string());
        if self.fail.iter().any(|f| *f == code) {
            return Err(format!("HTTP error: 404 Not Found /svg/{code}").into());
        }
        Ok(format!("<svg>{code}</svg>").into_bytes())
    }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("country_cards_flags_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn dataset() -> CountryDataset {
    parse_table(FIXTURE).unwrap()
}

fn opts(policy: AssetPolicy) -> AssetOptions {
    AssetOptions { policy, ..AssetOptions::default() }
}

fn run_policy(
    policy: AssetPolicy,
    flags: &Path,
    source: &FakeFlags,
) -> Result<AssetReport, Box<dyn Error>> {
    download_flags(&dataset(), &opts(policy), flags, source, &mut NullProgress)
}

#[test]
fn fresh_dir_fetches_every_flag_by_numeric_code() {
    let root = tmp_dir("fresh");
    let flags = root.join("flags");
    let source = FakeFlags::new(&[]);

    let report = run_policy(AssetPolicy::SkipIfDirExists, &flags, &source).unwrap();

    assert_eq!((report.fetched, report.skipped, report.failed), (6, 0, 0));
    assert_eq!(source.requests.borrow()[2], "020");
    assert_eq!(fs::read_to_string(flags.join("Andorra.svg")).unwrap(), "<svg>020</svg>");
    assert!(flags.join("Åland Islands.svg").is_file());
}

#[test]
fn existing_dir_issues_zero_requests() {
    let root = tmp_dir("existing");
    let flags = root.join("flags");
    fs::create_dir_all(&flags).unwrap(); // empty, yet counts as done
    let source = FakeFlags::new(&[]);

    let report = run_policy(AssetPolicy::SkipIfDirExists, &flags, &source).unwrap();

    assert_eq!(source.count(), 0);
    assert_eq!(report.skipped, 6);
    assert_eq!(fs::read_dir(&flags).unwrap().count(), 0);
}

#[test]
fn failed_fetch_is_skipped_and_run_continues() {
    let root = tmp_dir("failed");
    let flags = root.join("flags");
    let source = FakeFlags::new(&["248"]);

    let report = run_policy(AssetPolicy::SkipIfDirExists, &flags, &source).unwrap();

    assert_eq!(source.count(), 6);
    assert_eq!((report.fetched, report.failed), (5, 1));
    assert!(!flags.join("Åland Islands.svg").exists());
    assert!(flags.join("Côte d'Ivoire.svg").exists());
}

#[test]
fn resume_fetches_only_missing_files() {
    let root = tmp_dir("resume");
    let flags = root.join("flags");
    fs::create_dir_all(&flags).unwrap();
    fs::write(flags.join("Andorra.svg"), "<svg>old</svg>").unwrap();
    fs::write(flags.join("Afghanistan.svg"), "<svg>old</svg>").unwrap();
    let source = FakeFlags::new(&[]);

    let report = run_policy(AssetPolicy::SkipExistingFiles, &flags, &source).unwrap();

    assert_eq!(source.count(), 4);
    assert_eq!((report.fetched, report.skipped), (4, 2));
    assert!(!source.requests.borrow().iter().any(|c| c == "020"));
    assert_eq!(fs::read_to_string(flags.join("Andorra.svg")).unwrap(), "<svg>old</svg>");
}

#[test]
fn never_policy_touches_nothing() {
    let root = tmp_dir("never");
    let flags = root.join("flags");
    let source = FakeFlags::new(&[]);

    let report = run_policy(AssetPolicy::Never, &flags, &source).unwrap();

    assert_eq!(source.count(), 0);
    assert_eq!(report.skipped, 6);
    assert!(!flags.exists());
}

#[test]
fn flags_path_that_is_a_file_is_an_error() {
    let root = tmp_dir("not_a_dir");
    let flags = root.join("flags");
    fs::write(&flags, "not a directory").unwrap();
    let source = FakeFlags::new(&[]);

    let err = run_policy(AssetPolicy::SkipIfDirExists, &flags, &source).unwrap_err();

    assert!(err.to_string().contains("not a directory"), "{err}");
    assert_eq!(source.count(), 0);
    assert!(flags.is_file());
}
