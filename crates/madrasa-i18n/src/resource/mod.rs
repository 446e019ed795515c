//! Locale resource parsing. JSON in, de-duplicated `LocaleTable` out.
//!
//! Resources are authored by hand and occasionally carry the same key twice
//! at one nesting level. Plain JSON parsers keep the last occurrence
//! silently; here the **first** occurrence wins and every dropped duplicate
//! is reported so the file can be fixed.


use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use madrasa_core::error::MadrasaError;

use crate::table::{dotted_key_reason, join_path, LocaleTable, Node};

/// A key that appeared more than once at the same nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    /// Dotted path of the repeated key.
    pub path: String,
}

/// Outcome of parsing one resource.
#[derive(Debug, Clone)]
pub struct ParsedResource {
    pub table: LocaleTable,
    /// Later occurrences that were dropped, in document order.
    pub duplicates: Vec<DuplicateKey>,
}

/// Parse resource JSON. `source_name` is used in errors and logs.
///
/// The root must be an object, every leaf a string, and no key may contain
/// `.`. Keys keep their document order.
pub fn parse_resource(source_name: &str, json: &str) -> Result<ParsedResource, MadrasaError> {
    let mut duplicates = Vec::new();
    let mut de = serde_json::Deserializer::from_str(json);
    let node = NodeSeed {
        path: String::new(),
        duplicates: &mut duplicates,
    }
    .deserialize(&mut de)
    .map_err(|e| MadrasaError::resource(source_name, e.to_string()))?;
    de.end()
        .map_err(|e| MadrasaError::resource(source_name, e.to_string()))?;

    let Node::Table(table) = node else {
        return Err(MadrasaError::resource(source_name, "root must be a JSON object"));
    };

    for dup in &duplicates {
        warn!("{source_name}: dropped duplicate key `{}`", dup.path);
    }

    Ok(ParsedResource { table, duplicates })
}

/// Read and parse one resource file.
pub fn read_resource(path: &Path) -> Result<ParsedResource, MadrasaError> {
    let content = std::fs::read_to_string(path)?;
    parse_resource(&path.display().to_string(), &content)
}

/// Write a table back to disk as pretty JSON.
pub fn write_resource(path: &Path, table: &LocaleTable) -> Result<(), MadrasaError> {
    std::fs::write(path, table.to_json_pretty()?)?;
    Ok(())
}

/// Locale id for a resource file: its stem (`locales/ar.json` → `ar`).
pub fn locale_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Every `*.json` file directly inside `dir`, sorted by path.
pub fn resource_files(dir: &Path) -> Result<Vec<PathBuf>, MadrasaError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validation result for one resource file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub locale: String,
    pub result: Result<ParsedResource, MadrasaError>,
}

impl FileReport {
    /// Parsed without errors and without duplicates.
    pub fn is_clean(&self) -> bool {
        matches!(&self.result, Ok(parsed) if parsed.duplicates.is_empty())
    }

    /// Parsed, but duplicates were dropped. Rewriting the file fixes it.
    pub fn needs_rewrite(&self) -> bool {
        matches!(&self.result, Ok(parsed) if !parsed.duplicates.is_empty())
    }
}

/// Parse every resource in `dir`. Individual file failures are reported,
/// not returned; only an unreadable directory is an error.
pub fn validate_dir(dir: &Path) -> Result<Vec<FileReport>, MadrasaError> {
    let reports = resource_files(dir)?
        .into_iter()
        .map(|path| FileReport {
            locale: locale_id(&path).unwrap_or_default(),
            result: read_resource(&path),
            path,
        })
        .collect();
    Ok(reports)
}

/// Deserializes one node while tracking its dotted path.
struct NodeSeed<'a> {
    path: String,
    duplicates: &'a mut Vec<DuplicateKey>,
}

impl<'de> DeserializeSeed<'de> for NodeSeed<'_> {
    type Value = Node;

    fn deserialize<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed<'_> {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "a JSON object of translations")
        } else {
            write!(f, "a string or an object at `{}`", self.path)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Leaf(v))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let NodeSeed {
            path: prefix,
            duplicates,
        } = self;
        let mut table = LocaleTable::default();

        while let Some(key) = map.next_key::<String>()? {
            let path = join_path(&prefix, &key);
            if key.contains('.') {
                return Err(de::Error::custom(dotted_key_reason(&path)));
            }
            if table.contains_key(&key) {
                // Validated, then dropped along with anything repeated inside it.
                let mut nested = Vec::new();
                map.next_value_seed(NodeSeed {
                    path: path.clone(),
                    duplicates: &mut nested,
                })?;
                duplicates.push(DuplicateKey { path });
            } else {
                let node = map.next_value_seed(NodeSeed {
                    path,
                    duplicates: &mut *duplicates,
                })?;
                table.insert_first(key, node);
            }
        }

        Ok(Node::Table(table))
    }
}
