// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows where the data lives in one remote page and how to read
//! it into store shapes. Specs only extract: downloading assets, writing
//! files and building decks happen in the layers above.
//!
//! Conventions:
//! - Parsing is pure and testable offline against captured HTML.
//! - A spec fails loudly when the page shape no longer matches, rather than
//!   returning a partial dataset.
pub mod country_codes;
