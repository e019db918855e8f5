// src/deck/models.rs
// Note types for the two decks. Ids are fixed so re-imports update in place.

use genanki_rs::{Field, Model, Template};

use crate::config::consts::{FLAG_MODEL_ID, ISO_MODEL_ID};

pub const STYLE: &str = r#"
.center {
  display: flex;
  align-items: center;
  justify-content: center;
}
"#;

pub const FLAG_FIELDS: [&str; 3] = ["Country", "Image_lg", "Image_sm"];
pub const ISO_FIELDS: [&str; 4] = ["Country", "Alpha-2", "Alpha-3", "Numeric"];

/// (name, question, answer)
pub const FLAG_TEMPLATES: [(&str, &str, &str); 2] = [
    (
        "Flag to Country Name",
        r#"<div class="center">{{Image_lg}}</div>"#,
        r#"{{FrontSide}}<hr id="answer"><p>Name: {{Country}}</p>"#,
    ),
    (
        "Country Name To Flag",
        r#"<div class="center">The flag for {{Country}}</div>"#,
        r#"{{FrontSide}}<hr id="answer"><div class="center">{{Image_sm}}</div>"#,
    ),
];

pub const ISO_TEMPLATES: [(&str, &str, &str); 6] = [
    (
        "Country Name to Alpha 2",
        "<div class=center><p>What is the Alpha-2 code for {{Country}}?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>Alpha-2: {{Alpha-2}}</p>"#,
    ),
    (
        "Country Name to Alpha 3",
        "<div class=center><p>What is the Alpha-3 code for {{Country}}?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>Alpha-3: {{Alpha-3}}</p>"#,
    ),
    (
        "Country Name to Numeric",
        "<div class=center><p>What is the Numeric code for {{Country}}?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>{{Numeric}}</p>"#,
    ),
    (
        "Alpha 2 to Country Name",
        "<div class=center><p>What country does the alpha-2 code <b>{{Alpha-2}}</b> represent?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>Country: {{Country}}</p>"#,
    ),
    (
        "Alpha 3 to Country Name",
        "<div class=center><p>What country does the alpha-3 code <b>{{Alpha-3}}</b> represent?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>{{Country}}</p>"#,
    ),
    (
        "Numeric to Country Name",
        "<div class=center><p>What country does the numeric code <b>{{Numeric}}</b> represent?</p></div>",
        r#"{{FrontSide}}<hr id="answer"><p>{{Country}}</p>"#,
    ),
];

fn build(id: i64, name: &str, fields: &[&str], templates: &[(&str, &str, &str)]) -> Model {
    Model::new_with_options(
        id,
        name,
        fields.iter().map(|f| Field::new(f)).collect(),
        templates
            .iter()
            .map(|(name, q, a)| Template::new(name).qfmt(q).afmt(a))
            .collect(),
        Some(STYLE),
        None,
        None,
        None,
        None,
    )
}

pub fn flag_model() -> Model {
    build(FLAG_MODEL_ID, "Flag Model", &FLAG_FIELDS, &FLAG_TEMPLATES)
}

pub fn iso_model() -> Model {
    build(ISO_MODEL_ID, "ISO3166 Model", &ISO_FIELDS, &ISO_TEMPLATES)
}
