// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Outline, OutlineEntry, OutlineError};

/// Nested mind-map node, the shape returned by the mind-map generator.
///
/// `label` is accepted as an alias of `name`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MindMapNode {
    #[serde(alias = "label")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MindMapNode>,
}

#[cfg(test)]
impl MindMapNode {
    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        Self { name: name.into(), subtitle: None, icon: None, children: Vec::new() }
    }

    pub(crate) fn with_children(name: impl Into<String>, children: Vec<MindMapNode>) -> Self {
        Self { name: name.into(), subtitle: None, icon: None, children }
    }

    pub(crate) fn to_outline(&self) -> Outline {
        let entry_of = |node: &MindMapNode| {
            OutlineEntry::new(node.name.as_str())
                .with_subtitle(node.subtitle.as_deref())
                .with_icon(node.icon.as_deref())
        };
        let mut outline = Outline::with_root(entry_of(self));
        let mut stack = self.children.iter().rev().map(|child| (child, 0usize)).collect::<Vec<_>>();
        while let Some((node, parent)) = stack.pop() {
            let Ok(idx) = outline.push_child(parent, entry_of(node)) else {
                continue;
            };
            stack.extend(node.children.iter().rev().map(|child| (child, idx)));
        }
        outline
    }
}

/// JSON schema of the nested input shape.
pub fn input_schema() -> schemars::Schema {
    schemars::schema_for!(MindMapNode)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

impl fmt::Display for EdgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Input that does not describe a tree.
///
/// `path` fields are JSON pointers into the input document; the root is `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTreeInput {
    NotAnObject { path: String },
    MissingLabel { path: String },
    LabelNotString { path: String },
    FieldNotString { path: String, field: &'static str },
    NotAnArray { path: String, field: &'static str },
    InvalidKey { path: String },
    EmptyGraph,
    DuplicateNode { key: String },
    UnknownNode { edge_index: usize, endpoint: EdgeEndpoint, key: String },
    MultipleParents { key: String },
    MultipleRoots { keys: Vec<String> },
    CycleDetected { keys: Vec<String> },
    Outline(OutlineError),
}

struct PointerDisplay<'a>(&'a str);

impl fmt::Display for PointerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(self.0)
        }
    }
}

fn write_keys(f: &mut fmt::Formatter<'_>, keys: &[String]) -> fmt::Result {
    for (idx, key) in keys.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}")?;
    }
    Ok(())
}

impl fmt::Display for InvalidTreeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { path } => {
                write!(f, "expected a JSON object at {}", PointerDisplay(path))
            }
            Self::MissingLabel { path } => {
                write!(f, "node at {} has no \"name\"", PointerDisplay(path))
            }
            Self::LabelNotString { path } => {
                write!(f, "\"name\" of node at {} must be a string", PointerDisplay(path))
            }
            Self::FieldNotString { path, field } => {
                write!(f, "\"{field}\" of node at {} must be a string", PointerDisplay(path))
            }
            Self::NotAnArray { path, field } => {
                write!(f, "\"{field}\" at {} must be an array", PointerDisplay(path))
            }
            Self::InvalidKey { path } => {
                write!(f, "expected a string or integer key at {}", PointerDisplay(path))
            }
            Self::EmptyGraph => f.write_str("graph has no nodes"),
            Self::DuplicateNode { key } => write!(f, "node key {key} is used more than once"),
            Self::UnknownNode { edge_index, endpoint, key } => {
                write!(f, "edge {edge_index} references unknown {endpoint} node {key}")
            }
            Self::MultipleParents { key } => write!(f, "node {key} has more than one parent"),
            Self::MultipleRoots { keys } => {
                f.write_str("graph has more than one root: ")?;
                write_keys(f, keys)
            }
            Self::CycleDetected { keys } => {
                if keys.is_empty() {
                    return f.write_str("graph contains a cycle");
                }
                f.write_str("graph contains a cycle involving nodes: ")?;
                write_keys(f, keys)
            }
            Self::Outline(err) => write!(f, "outline error: {err}"),
        }
    }
}

impl std::error::Error for InvalidTreeInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Outline(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutlineError> for InvalidTreeInput {
    fn from(value: OutlineError) -> Self {
        Self::Outline(value)
    }
}

impl InvalidTreeInput {
    /// Re-anchors a node-level error at `path`.
    fn at(self, path: String) -> Self {
        match self {
            Self::NotAnObject { .. } => Self::NotAnObject { path },
            Self::MissingLabel { .. } => Self::MissingLabel { path },
            Self::LabelNotString { .. } => Self::LabelNotString { path },
            Self::FieldNotString { field, .. } => Self::FieldNotString { path, field },
            Self::NotAnArray { field, .. } => Self::NotAnArray { path, field },
            Self::InvalidKey { .. } => Self::InvalidKey { path },
            other => other,
        }
    }
}

#[derive(Debug)]
pub enum MindMapParseError {
    Syntax(serde_json::Error),
    Invalid(InvalidTreeInput),
}

impl fmt::Display for MindMapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed JSON: {err}"),
            Self::Invalid(err) => write!(f, "invalid mind map: {err}"),
        }
    }
}

impl std::error::Error for MindMapParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for MindMapParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Syntax(value)
    }
}

impl From<InvalidTreeInput> for MindMapParseError {
    fn from(value: InvalidTreeInput) -> Self {
        Self::Invalid(value)
    }
}

/// Parses mind-map JSON text in either the nested or the flat form.
///
/// Nesting depth is not limited: the parser grows its stack on demand and the intermediate JSON
/// value is torn down iteratively.
pub fn parse_mind_map(src: &str) -> Result<Outline, MindMapParseError> {
    let mut de = serde_json::Deserializer::from_str(src);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    let outline = outline_from_value(&value);
    release(value);
    Ok(outline?)
}

/// Drops `value` without recursing into nested arrays and objects.
fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(mut value) = pending.pop() {
        match &mut value {
            Value::Array(items) => pending.append(items),
            Value::Object(members) => {
                pending.extend(std::mem::take(members).into_iter().map(|(_, member)| member));
            }
            _ => {}
        }
    }
}

/// Validates an already parsed JSON value.
///
/// An object with a `nodes` member and no `name`/`label` is read as the flat form; anything else
/// as the nested form.
pub fn outline_from_value(value: &Value) -> Result<Outline, InvalidTreeInput> {
    match value {
        Value::Object(obj)
            if obj.contains_key("nodes")
                && !obj.contains_key("name")
                && !obj.contains_key("label") =>
        {
            flat_outline(obj)
        }
        _ => nested_outline(value),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, InvalidTreeInput> {
    value.as_object().ok_or_else(|| InvalidTreeInput::NotAnObject { path: path.to_owned() })
}

fn optional_string<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<Option<&'a str>, InvalidTreeInput> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(InvalidTreeInput::FieldNotString { path: path.to_owned(), field }),
    }
}

fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<&'a [Value], InvalidTreeInput> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(InvalidTreeInput::NotAnArray { path: path.to_owned(), field }),
    }
}

fn entry_fields(obj: &Map<String, Value>, path: &str) -> Result<OutlineEntry, InvalidTreeInput> {
    let label = match obj.get("name").or_else(|| obj.get("label")) {
        None => return Err(InvalidTreeInput::MissingLabel { path: path.to_owned() }),
        Some(Value::String(label)) => label.as_str(),
        Some(_) => return Err(InvalidTreeInput::LabelNotString { path: path.to_owned() }),
    };
    Ok(OutlineEntry::new(label)
        .with_subtitle(optional_string(obj, path, "subtitle")?)
        .with_icon(optional_string(obj, path, "icon")?))
}

fn nested_outline(root: &Value) -> Result<Outline, InvalidTreeInput> {
    let (root_entry, root_children) = nested_node(root)?;
    let mut outline = Outline::with_root(root_entry);
    // Position of every entry among its siblings. JSON pointers are only rebuilt on error.
    let mut positions = vec![0usize];

    // (value, parent entry, position among siblings)
    let mut stack = Vec::<(&Value, usize, usize)>::new();
    push_children(&mut stack, root_children, 0);

    while let Some((value, parent, position)) = stack.pop() {
        let (entry, children) = nested_node(value)
            .map_err(|err| err.at(child_pointer(&outline, &positions, parent, position)))?;
        let idx = outline.push_child(parent, entry)?;
        positions.push(position);
        push_children(&mut stack, children, idx);
    }

    Ok(outline)
}

/// Entry and children of one nested node. Errors carry the root path `""`.
fn nested_node(value: &Value) -> Result<(OutlineEntry, &[Value]), InvalidTreeInput> {
    let obj = as_object(value, "")?;
    Ok((entry_fields(obj, "")?, optional_array(obj, "", "children")?))
}

fn push_children<'a>(stack: &mut Vec<(&'a Value, usize, usize)>, children: &'a [Value], parent: usize) {
    for (position, child) in children.iter().enumerate().rev() {
        stack.push((child, parent, position));
    }
}

fn child_pointer(outline: &Outline, positions: &[usize], parent: usize, position: usize) -> String {
    let mut steps = vec![position];
    let mut at = parent;
    while let Some(up) = outline.entries().get(at).and_then(|entry| entry.parent()) {
        steps.push(positions[at]);
        at = up;
    }
    steps.iter().rev().map(|step| format!("/children/{step}")).collect()
}

fn scalar_key(value: Option<&Value>, path: String) -> Result<String, InvalidTreeInput> {
    match value {
        Some(Value::String(key)) => Ok(key.clone()),
        Some(Value::Number(key)) if key.is_i64() || key.is_u64() => Ok(key.to_string()),
        _ => Err(InvalidTreeInput::InvalidKey { path }),
    }
}

fn flat_outline(obj: &Map<String, Value>) -> Result<Outline, InvalidTreeInput> {
    let nodes = optional_array(obj, "", "nodes")?;
    let edges = optional_array(obj, "", "edges")?;
    if nodes.is_empty() {
        return Err(InvalidTreeInput::EmptyGraph);
    }

    let mut keys = Vec::<String>::with_capacity(nodes.len());
    let mut entries = Vec::<OutlineEntry>::with_capacity(nodes.len());
    let mut index_of = BTreeMap::<String, usize>::new();
    for (idx, node) in nodes.iter().enumerate() {
        let path = format!("/nodes/{idx}");
        let node = as_object(node, &path)?;
        let key = scalar_key(node.get("id"), format!("{path}/id"))?;
        if index_of.insert(key.clone(), idx).is_some() {
            return Err(InvalidTreeInput::DuplicateNode { key });
        }
        entries.push(entry_fields(node, &path)?);
        keys.push(key);
    }

    let mut parent_of = vec![None::<usize>; nodes.len()];
    let mut children_of = vec![Vec::<usize>::new(); nodes.len()];
    for (edge_index, edge) in edges.iter().enumerate() {
        let path = format!("/edges/{edge_index}");
        let edge = as_object(edge, &path)?;
        let source = scalar_key(
            edge.get("source").or_else(|| edge.get("from")),
            format!("{path}/source"),
        )?;
        let target = scalar_key(
            edge.get("target").or_else(|| edge.get("to")),
            format!("{path}/target"),
        )?;
        let lookup = |key: String, endpoint: EdgeEndpoint| {
            index_of.get(&key).copied().ok_or(InvalidTreeInput::UnknownNode {
                edge_index,
                endpoint,
                key,
            })
        };
        let from = lookup(source, EdgeEndpoint::Source)?;
        let to = lookup(target, EdgeEndpoint::Target)?;
        if parent_of[to].is_some() {
            return Err(InvalidTreeInput::MultipleParents { key: keys[to].clone() });
        }
        parent_of[to] = Some(from);
        children_of[from].push(to);
    }

    let roots = (0..nodes.len()).filter(|idx| parent_of[*idx].is_none()).collect::<Vec<_>>();
    if roots.len() > 1 {
        return Err(InvalidTreeInput::MultipleRoots {
            keys: roots.into_iter().map(|idx| keys[idx].clone()).collect(),
        });
    }
    // With every node owning exactly one parent, no root means every node sits on or below a cycle.
    let Some(&root) = roots.first() else {
        return Err(InvalidTreeInput::CycleDetected { keys });
    };

    let mut reached = vec![false; nodes.len()];
    reached[root] = true;
    let mut outline = Outline::with_root(entries[root].clone());
    let mut stack = children_of[root].iter().rev().map(|child| (*child, 0usize)).collect::<Vec<_>>();
    while let Some((node, parent)) = stack.pop() {
        reached[node] = true;
        let idx = outline.push_child(parent, entries[node].clone())?;
        stack.extend(children_of[node].iter().rev().map(|child| (*child, idx)));
    }

    let unreached = (0..nodes.len()).filter(|idx| !reached[*idx]).collect::<Vec<_>>();
    if !unreached.is_empty() {
        return Err(InvalidTreeInput::CycleDetected {
            keys: unreached.into_iter().map(|idx| keys[idx].clone()).collect(),
        });
    }

    Ok(outline)
}
