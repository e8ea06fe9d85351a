//! Records served by the candidates API and the decoding rules that build them.
//!
//! DESIGN
//! ======
//! The API stores each record as a JSON string inside a JSON envelope, and the
//! inner documents are loosely shaped. Records are therefore built from a
//! `serde_json::Value` field by field: a missing, non-string, or empty field
//! falls back to its placeholder instead of failing the whole record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// Image shown when a record has no usable photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Text used for every field of a record that could not be loaded.
pub const LOAD_FAILED: &str = "Error al cargar";

pub const NAME_UNAVAILABLE: &str = "Nombre no disponible";
pub const PARTY_UNAVAILABLE: &str = "Partido no disponible";
pub const TITLE_UNAVAILABLE: &str = "Título no disponible";
pub const DESCRIPTION_UNAVAILABLE: &str = "Descripción no disponible";
pub const PROBLEM_LOAD_FAILED_DESCRIPTION: &str = "No se pudo cargar la información del problema";

/// A record kind served by an index endpoint plus per-id detail endpoints.
pub trait DirectoryRecord: Sized {
    /// Path segment of the collection, e.g. `"partidos"`.
    const COLLECTION: &'static str;

    /// Build a record from the decoded inner document.
    fn from_record(id: &str, record: &Value) -> Self;

    /// The record substituted when fetching or decoding `id` failed.
    fn failed(id: &str) -> Self;
}

/// One entry of the index response's `data.keys` array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeyDescriptor {
    pub name: String,
}

/// A candidate card on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party: String,
    /// Photo URL, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    pub description: String,
}

impl DirectoryRecord for Candidate {
    const COLLECTION: &'static str = "partidos";

    fn from_record(id: &str, record: &Value) -> Self {
        Self {
            id: id.to_owned(),
            name: text_at(record, &["presidente", "nombrePresidente"]).unwrap_or(NAME_UNAVAILABLE).to_owned(),
            party: text_at(record, &["partido"]).unwrap_or(PARTY_UNAVAILABLE).to_owned(),
            image: text_at(record, &["presidente", "foto"]).unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            description: text_at(record, &["descripcion"]).unwrap_or(DESCRIPTION_UNAVAILABLE).to_owned(),
        }
    }

    fn failed(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: LOAD_FAILED.to_owned(),
            party: LOAD_FAILED.to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            description: LOAD_FAILED.to_owned(),
        }
    }
}

/// A country problem listed on the problems page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl DirectoryRecord for Problem {
    const COLLECTION: &'static str = "problemas";

    fn from_record(id: &str, record: &Value) -> Self {
        Self {
            id: id.to_owned(),
            title: text_at(record, &["titulo"]).unwrap_or(TITLE_UNAVAILABLE).to_owned(),
            description: text_at(record, &["descripcion"]).unwrap_or(DESCRIPTION_UNAVAILABLE).to_owned(),
        }
    }

    fn failed(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: LOAD_FAILED.to_owned(),
            description: PROBLEM_LOAD_FAILED_DESCRIPTION.to_owned(),
        }
    }
}

/// Walk nested object fields and return a non-empty string leaf.
fn text_at<'a>(record: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut node = record;
    for key in path {
        node = node.get(*key)?;
    }
    node.as_str().filter(|s| !s.is_empty())
}
