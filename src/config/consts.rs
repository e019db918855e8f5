// src/config/consts.rs

// Net config
pub const TABLE_URL: &str = "https://www.iban.com/country-codes";
pub const FLAG_ENDPOINT: &str = "https://countryflagsapi.com/svg/";
pub const USER_AGENT: &str = concat!("country_cards/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Columns of the country-code table (by position)
pub const NAME_COLUMN: usize = 0;
pub const ALPHA2_COLUMN: usize = 1;
pub const FLAG_CODE_COLUMN: usize = 3; // Numeric

// Local files, relative to the output directory
pub const DEFAULT_OUT_DIR: &str = ".";
pub const FLAGS_DIR: &str = "flags";
pub const FLAG_EXT: &str = "svg";
pub const JSON_FILE: &str = "countries.json";
pub const FLAG_DECK_FILE: &str = "flag_cards.apkg";
pub const ISO_DECK_FILE: &str = "iso3166.apkg";
pub const LOG_FILE: &str = ".store/debug.log";

// Anki ids. Fixed so re-imports update instead of duplicating.
pub const FLAG_MODEL_ID: i64 = 1121025992;
pub const ISO_MODEL_ID: i64 = 1228079407;
pub const FLAG_DECK_ID: i64 = 1775916622;
pub const ISO_DECK_ID: i64 = 1963129519;
pub const FLAG_DECK_NAME: &str = "Country Flags";
pub const ISO_DECK_NAME: &str = "ISO3166";

// Flag image heights on the two card sides
pub const FLAG_HEIGHT_LG: &str = "450px";
pub const FLAG_HEIGHT_SM: &str = "225px";
