//! Tolerant parsing of the generator's manga and materials data.
//!
//! The generator writes plain JSON or a JavaScript assignment wrapping it. Individual entries
//! that do not match the expected shape are skipped with a warning instead of failing the whole
//! catalog; only text that is not JSON at all is an error.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::types::{ChapterId, VolumeId};

use super::{Chapter, GalleryItem, Result, Volume};

#[derive(Debug, Deserialize)]
struct RawVolume {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    cover: Option<Value>,
    #[serde(default)]
    chapters: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    pages: Option<Value>,
}

/// Remove a leading `const|let|var <name> =` and the trailing `;` the generator emits for
/// script files. Plain JSON passes through unchanged.
pub fn strip_js_assignment(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = ["const ", "let ", "var "].iter().find_map(|kw| trimmed.strip_prefix(kw))
    else {
        return trimmed;
    };

    let Some((name, value)) = rest.split_once('=') else {
        return trimmed;
    };
    let name = name.trim();
    let is_ident =
        !name.is_empty() && name.chars().all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$');
    if !is_ident {
        return trimmed;
    }

    value.trim().trim_end_matches(';').trim_end()
}

pub(super) fn parse_volumes(text: &str) -> Result<BTreeMap<VolumeId, Volume>> {
    let root: Value =
        serde_json::from_str(strip_js_assignment(text)).context("parsing manga data as JSON")?;
    let entries = match root {
        Value::Object(entries) => entries,
        Value::Array(items) if items.is_empty() => return Ok(BTreeMap::new()),
        other => {
            warn!(found = %other, "manga data is not keyed by volume; catalog left empty");
            return Ok(BTreeMap::new());
        }
    };

    let mut volumes = BTreeMap::new();
    for (key, value) in entries {
        let Some(id) = parse_key::<VolumeId>(&key, "volume") else {
            continue;
        };
        let raw: RawVolume = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(volume = %key, error = %err, "skipping malformed volume entry");
                continue;
            }
        };

        let title = string_field(raw.title, "volume title", &key).unwrap_or_default();
        let cover = string_field(raw.cover, "volume cover", &key)
            .filter(|cover| !cover.trim().is_empty());
        let chapters = parse_chapters(id, raw.chapters);

        if volumes.insert(id, Volume { title, cover, chapters }).is_some() {
            warn!(volume = %key, "duplicate volume id; later entry wins");
        }
    }

    Ok(volumes)
}

fn parse_chapters(volume: VolumeId, value: Option<Value>) -> BTreeMap<ChapterId, Chapter> {
    let entries = match value {
        Some(Value::Object(entries)) => entries,
        None | Some(Value::Null) => return BTreeMap::new(),
        Some(Value::Array(items)) if items.is_empty() => return BTreeMap::new(),
        Some(other) => {
            warn!(%volume, found = %other, "volume chapters are not keyed by chapter");
            return BTreeMap::new();
        }
    };

    let mut chapters = BTreeMap::new();
    for (key, value) in entries {
        let Some((id, chapter)) = parse_chapter(volume, &key, value) else {
            continue;
        };
        if chapters.insert(id, chapter).is_some() {
            warn!(%volume, chapter = %key, "duplicate chapter id; later entry wins");
        }
    }
    chapters
}

fn parse_chapter(volume: VolumeId, key: &str, value: Value) -> Option<(ChapterId, Chapter)> {
    let id = parse_key::<ChapterId>(key, "chapter")?;
    let raw: RawChapter = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%volume, chapter = %key, error = %err, "skipping malformed chapter entry");
            return None;
        }
    };

    let pages = match raw.pages {
        Some(Value::Array(items)) => Some(string_items(items, "page")),
        Some(other) => {
            warn!(%volume, chapter = %key, found = %other, "chapter pages are not a list");
            None
        }
        None => None,
    };
    let title = string_field(raw.title, "chapter title", key).unwrap_or_default();

    Some((id, Chapter { title, pages }))
}

/// A string field, or `None` with a warning when it holds anything else.
fn string_field(value: Option<Value>, field: &str, key: &str) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            warn!(field, key, found = %other, "ignoring non-string field");
            None
        }
    }
}

pub(super) fn parse_gallery(text: &str) -> Result<Vec<GalleryItem>> {
    let root: Value = serde_json::from_str(strip_js_assignment(text))
        .context("parsing materials data as JSON")?;

    match root {
        Value::Array(items) => Ok(string_items(items, "gallery item")
            .into_iter()
            .map(|src| GalleryItem { src })
            .collect()),
        other => {
            warn!(found = %other, "materials data is not a list; gallery left empty");
            Ok(Vec::new())
        }
    }
}

pub(super) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading catalog data at {}", path.display())),
    }
}

fn parse_key<T: FromStr>(key: &str, kind: &str) -> Option<T> {
    let parsed = key.parse::<T>().ok();
    if parsed.is_none() {
        warn!(key, kind, "skipping entry with non-numeric id");
    }
    parsed
}

fn string_items(items: Vec<Value>, kind: &str) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            other => {
                warn!(kind, found = %other, "skipping non-string entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_wrapper() {
        assert_eq!(strip_js_assignment("const generatedMangaData = {\"1\": {}};\n"), "{\"1\": {}}");
        assert_eq!(strip_js_assignment("var data=[];"), "[]");
        assert_eq!(strip_js_assignment("  [\"a.png\"]  "), "[\"a.png\"]");
    }

    #[test]
    fn leaves_non_assignments_alone() {
        assert_eq!(strip_js_assignment("let a b = 1;"), "let a b = 1;");
    }

    #[test]
    fn non_string_pages_are_dropped() {
        let value = serde_json::json!({ "title": "Ch", "pages": ["a.jpg", 4, "b.jpg"] });
        let (id, chapter) = parse_chapter(VolumeId(1), "7", value).expect("chapter");
        assert_eq!(id, ChapterId(7));
        assert_eq!(chapter.pages(), ["a.jpg".to_string(), "b.jpg".to_string()]);
    }
}
