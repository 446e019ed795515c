//! Immutable per-locale translation trees.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use madrasa_core::error::MadrasaError;

/// One node of a locale tree: a nested table or a string leaf.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Table(LocaleTable),
}

/// Nested key → string mapping holding every translation for one locale.
///
/// Keys keep the order they were read in, so a rewritten resource only
/// differs where it was actually fixed. Keys never contain `.`.
///
/// There is no public mutating API. A changed resource means a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    entries: Vec<(String, Node)>,
    index: BTreeMap<String, usize>,
}

static EMPTY: LocaleTable = LocaleTable {
    entries: Vec::new(),
    index: BTreeMap::new(),
};

impl LocaleTable {
    /// A shared table with no keys.
    pub fn empty() -> &'static LocaleTable {
        &EMPTY
    }

    /// Build a table from a JSON value. The root must be an object and every
    /// leaf a string.
    pub fn from_value(value: &Value) -> Result<Self, MadrasaError> {
        let Value::Object(map) = value else {
            return Err(MadrasaError::resource("<value>", "root must be a JSON object"));
        };
        table_from_map(map, "")
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Append `key` unless it is already present; the first value stays.
    pub(crate) fn insert_first(&mut self, key: String, node: Node) {
        if self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, node));
    }

    fn child(&self, segment: &str) -> Option<&Node> {
        let &i = self.index.get(segment)?;
        self.entries.get(i).map(|(_, node)| node)
    }

    /// Walk a dotted key path. `None` when a segment is absent, when the walk
    /// hits a leaf before the path ends, or when it stops on a table.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut node = self.child(segments.next()?)?;
        for segment in segments {
            match node {
                Node::Table(table) => node = table.child(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        match node {
            Node::Leaf(text) => Some(text),
            Node::Table(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of string leaves at any depth.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                Node::Leaf(_) => 1,
                Node::Table(table) => table.leaf_count(),
            })
            .sum()
    }

    /// Dotted paths of every leaf, depth-first in table order.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys("", &mut keys);
        keys
    }

    fn collect_keys(&self, prefix: &str, out: &mut Vec<String>) {
        for (key, node) in &self.entries {
            let path = join_path(prefix, key);
            match node {
                Node::Leaf(_) => out.push(path),
                Node::Table(table) => table.collect_keys(&path, out),
            }
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, MadrasaError> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

impl Serialize for LocaleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// Message for a key that dotted lookup could never reach.
pub(crate) fn dotted_key_reason(path: &str) -> String {
    format!("key `{path}` contains '.' and cannot be looked up")
}

pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn table_from_map(map: &Map<String, Value>, path: &str) -> Result<LocaleTable, MadrasaError> {
    let mut table = LocaleTable::default();
    for (key, child) in map {
        let child_path = join_path(path, key);
        if key.contains('.') {
            return Err(MadrasaError::resource("<value>", dotted_key_reason(&child_path)));
        }
        table.insert_first(key.clone(), node_from_value(child, &child_path)?);
    }
    Ok(table)
}

fn node_from_value(value: &Value, path: &str) -> Result<Node, MadrasaError> {
    match value {
        Value::String(text) => Ok(Node::Leaf(text.clone())),
        Value::Object(map) => Ok(Node::Table(table_from_map(map, path)?)),
        other => Err(MadrasaError::resource(
            "<value>",
            format!("non-string value at `{path}`: {}", value_kind(other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
