// src/flags.rs
//! Flag images, one `<name>.svg` per country in the flags directory.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::FLAG_EXT;
use crate::config::options::{AssetOptions, AssetPolicy, FetchOptions};
use crate::core::net::Http;
use crate::core::sanitize::flag_file_stem;
use crate::file::ensure_directory;
use crate::progress::Progress;
use crate::store::CountryDataset;

/// Where flag images come from. The HTTP source is the real one.
pub trait FlagSource {
    fn fetch_flag(&self, code: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}

pub struct HttpFlags<'a> {
    http: &'a Http,
    opts: &'a FetchOptions,
}

impl<'a> HttpFlags<'a> {
    pub fn new(http: &'a Http, opts: &'a FetchOptions) -> Self {
        Self { http, opts }
    }
}

impl FlagSource for HttpFlags<'_> {
    fn fetch_flag(&self, code: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        self.http.get_bytes(&self.opts.flag_url(code))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssetReport {
    pub fetched: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// `Andorra` → `Andorra.svg`
pub fn flag_file_name(country: &str) -> String {
    join!(&flag_file_stem(country), ".", FLAG_EXT)
}

pub fn flag_path(dir: &Path, country: &str) -> PathBuf {
    dir.join(flag_file_name(country))
}

/// Download the flag of every record into `dir`, following `opts.policy`.
///
/// A failed fetch is logged and counted; the step carries on with the next
/// record. Only local I/O errors abort.
pub fn download_flags(
    dataset: &CountryDataset,
    opts: &AssetOptions,
    dir: &Path,
    source: &dyn FlagSource,
    progress: &mut dyn Progress,
) -> Result<AssetReport, Box<dyn Error>> {
    let mut report = AssetReport::default();

    match opts.policy {
        AssetPolicy::Never => {
            logf!("flag download disabled");
            report.skipped = dataset.len();
            return Ok(report);
        }
        AssetPolicy::SkipIfDirExists if dir.is_dir() => {
            // Whole step counts as done, whatever is actually inside
            for record in &dataset.records {
                let name = record.value_at(opts.name_column).unwrap_or_default();
                logw!("skipped {}", flag_path(dir, name).display());
                report.skipped += 1;
            }
            return Ok(report);
        }
        AssetPolicy::SkipIfDirExists | AssetPolicy::SkipExistingFiles => {}
    }

    ensure_directory(dir)?;
    progress.begin(dataset.len());

    for (i, record) in dataset.records.iter().enumerate() {
        let (Some(name), Some(code)) = (
            record.value_at(opts.name_column),
            record.value_at(opts.code_column),
        ) else {
            loge!("record {i} has no name/code column");
            report.failed += 1;
            continue;
        };
        let path = flag_path(dir, name);

        if opts.policy == AssetPolicy::SkipExistingFiles && path.exists() {
            logd!("skipped {}", path.display());
            report.skipped += 1;
            continue;
        }

        match source.fetch_flag(code) {
            Ok(bytes) => {
                fs::write(&path, bytes)?;
                logf!("wrote {}", path.display());
                report.fetched += 1;
                progress.item_done(name);
            }
            Err(e) => {
                loge!("{code} is invalid: {e}");
                report.failed += 1;
                progress.item_failed(name);
            }
        }
    }

    Ok(report)
}
