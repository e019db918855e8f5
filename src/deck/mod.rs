// src/deck/mod.rs
//! Flashcard decks built from the scraped dataset.
//!
//! Building is split in two: [`flag_notes`] / [`iso_notes`] turn records into
//! plain [`NoteSpec`]s (fields + GUID), then [`write_deck`] hands them to
//! `genanki-rs`, which owns the `.apkg` format.

pub mod guid;
pub mod models;

use std::error::Error;
use std::path::{Path, PathBuf};

use genanki_rs::{Deck, Model, Note, Package};

use crate::config::consts::{ALPHA2_COLUMN, FLAG_HEIGHT_LG, FLAG_HEIGHT_SM};
use crate::file::ensure_directory;
use crate::flags::{flag_file_name, flag_path};
use crate::store::CountryDataset;

use self::guid::guid_for;
use self::models::ISO_FIELDS;

/// One note's field values plus its stable identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteSpec {
    pub fields: Vec<String>,
    pub guid: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckReport {
    pub path: PathBuf,
    pub notes: usize,
    pub media: usize,
}

fn img_tag(file: &str, height: &str) -> String {
    format!(r#"<img src="{file}" height="{height}">"#)
}

/// Flag deck notes: name, large image, small image. Identity = name.
pub fn flag_notes(
    dataset: &CountryDataset,
    name_column: usize,
) -> Result<Vec<NoteSpec>, Box<dyn Error>> {
    let mut notes = Vec::with_capacity(dataset.len());
    for (i, record) in dataset.records.iter().enumerate() {
        let name = record
            .value_at(name_column)
            .ok_or_else(|| format!("record {i} has no column {name_column}"))?;
        let file = flag_file_name(name);
        let fields = vec![s!(name), img_tag(&file, FLAG_HEIGHT_LG), img_tag(&file, FLAG_HEIGHT_SM)];
        logd!("{fields:?}");
        notes.push(NoteSpec { guid: guid_for(&[name]), fields });
    }
    Ok(notes)
}

/// ISO deck notes: the record's values in column order. Identity = name + alpha-2.
pub fn iso_notes(dataset: &CountryDataset) -> Result<Vec<NoteSpec>, Box<dyn Error>> {
    let width = ISO_FIELDS.len();
    let mut notes = Vec::with_capacity(dataset.len());
    for (i, record) in dataset.records.iter().enumerate() {
        if record.len() < width {
            return Err(format!(
                "record {i} ({}) has {} fields, ISO3166 Model needs {width}",
                record.value_at(0).unwrap_or_default(),
                record.len()
            )
            .into());
        }
        let fields: Vec<String> = record.values().take(width).map(String::from).collect();
        logd!("{fields:?}");
        let guid = guid_for(&[fields[0].as_str(), fields[ALPHA2_COLUMN].as_str()]);
        notes.push(NoteSpec { fields, guid });
    }
    Ok(notes)
}

/// Flag files referenced by the dataset that exist on disk. Missing ones are
/// left out so the package can still be written.
pub fn flag_media(dataset: &CountryDataset, flags_dir: &Path, name_column: usize) -> Vec<PathBuf> {
    let mut media = Vec::new();
    for record in &dataset.records {
        let Some(name) = record.value_at(name_column) else { continue };
        let path = flag_path(flags_dir, name);
        if path.is_file() {
            media.push(path);
        } else {
            logw!("missing {}, left out of the package", path.display());
        }
    }
    media
}

/// Assemble one deck and write it, with `media`, as a package at `path`.
pub fn write_deck(
    path: &Path,
    deck_id: i64,
    deck_name: &str,
    model: &Model,
    notes: &[NoteSpec],
    media: &[PathBuf],
) -> Result<DeckReport, Box<dyn Error>> {
    let mut deck = Deck::new(deck_id, deck_name, "");
    for spec in notes {
        let fields: Vec<&str> = spec.fields.iter().map(String::as_str).collect();
        let guid = Some(spec.guid.as_str());
        let note = Note::new_with_options(model.clone(), fields, None, None, guid)?;
        deck.add_note(note);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let media_paths: Vec<String> = media.iter().map(|p| p.to_string_lossy().into_owned()).collect();
    let mut package = Package::new(vec![deck], media_paths.iter().map(String::as_str).collect())?;
    package.write_to_file(&path.to_string_lossy())?;
    logf!("wrote {} ({} notes, {} media)", path.display(), notes.len(), media.len());

    Ok(DeckReport { path: path.to_path_buf(), notes: notes.len(), media: media.len() })
}
