// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub assets: AssetOptions,
    pub output: OutputOptions,
    pub verbose: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            assets: AssetOptions::default(),
            output: OutputOptions::default(),
            verbose: false,
        }
    }
}

impl AppOptions {
    /// Flags directory resolved against the output directory.
    pub fn flags_dir(&self) -> PathBuf {
        self.output.resolve(&self.assets.dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.output.resolve(LOG_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub table_url: String,
    pub flag_endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Parse a saved page instead of fetching `table_url`.
    pub from_file: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            table_url: s!(TABLE_URL),
            flag_endpoint: s!(FLAG_ENDPOINT),
            user_agent: s!(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            from_file: None,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn flag_url(&self, code: &str) -> String {
        join!(&self.flag_endpoint, code)
    }
}

/// When the flag step downloads anything at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetPolicy {
    /// A pre-existing flags directory counts as "already done": nothing is fetched.
    SkipIfDirExists,
    /// Fetch only the flags whose file is missing.
    SkipExistingFiles,
    /// Never fetch.
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetOptions {
    pub dir: String,
    pub policy: AssetPolicy,
    pub name_column: usize,
    pub code_column: usize,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            dir: s!(FLAGS_DIR),
            policy: AssetPolicy::SkipIfDirExists,
            name_column: NAME_COLUMN,
            code_column: FLAG_CODE_COLUMN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub json_file: String,
    pub flag_deck_file: String,
    pub iso_deck_file: String,
    pub write_decks: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            json_file: s!(JSON_FILE),
            flag_deck_file: s!(FLAG_DECK_FILE),
            iso_deck_file: s!(ISO_DECK_FILE),
            write_decks: true,
        }
    }
}

impl OutputOptions {
    pub fn resolve<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.dir.join(name)
    }

    pub fn json_path(&self) -> PathBuf {
        self.resolve(&self.json_file)
    }

    pub fn flag_deck_path(&self) -> PathBuf {
        self.resolve(&self.flag_deck_file)
    }

    pub fn iso_deck_path(&self) -> PathBuf {
        self.resolve(&self.iso_deck_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let opts = AppOptions::default();
        assert_eq!(opts.flags_dir(), PathBuf::from(".").join("flags"));
        assert_eq!(opts.output.json_path(), PathBuf::from(".").join("countries.json"));
        assert_eq!(opts.output.flag_deck_path(), PathBuf::from(".").join("flag_cards.apkg"));
        assert_eq!(opts.output.iso_deck_path(), PathBuf::from(".").join("iso3166.apkg"));
        assert_eq!(opts.assets.policy, AssetPolicy::SkipIfDirExists);
        assert!(opts.output.write_decks);
    }

    #[test]
    fn paths_follow_out_dir() {
        let mut opts = AppOptions::default();
        opts.output.dir = PathBuf::from("build");
        assert_eq!(opts.flags_dir(), PathBuf::from("build").join("flags"));
        assert_eq!(opts.log_path(), PathBuf::from("build").join(".store/debug.log"));
    }

    #[test]
    fn flag_url_appends_code() {
        let fetch = FetchOptions::default();
        assert_eq!(fetch.flag_url("020"), "https://countryflagsapi.com/svg/020");
        assert_eq!(fetch.timeout(), Duration::from_secs(30));
    }
}
