//! JSON output formatting

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::tree::Node;

/// Serialized shape of a [`Node`].
///
/// Directory objects always carry `filecount` and `children`, even when the
/// view left no children; file objects never do.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonNode<'a> {
    Dir {
        dirname: &'a str,
        filesize: u64,
        usage: f64,
        filecount: u64,
        children: Vec<JsonNode<'a>>,
    },
    File {
        filename: &'a str,
        filesize: u64,
        usage: f64,
    },
}

impl<'a> From<&'a Node> for JsonNode<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::File { name, size, usage } => JsonNode::File {
                filename: name,
                filesize: *size,
                usage: *usage,
            },
            Node::Dir {
                name,
                size,
                file_count,
                usage,
                children,
            } => JsonNode::Dir {
                dirname: name,
                filesize: *size,
                usage: *usage,
                filecount: *file_count,
                children: children.iter().map(JsonNode::from).collect(),
            },
        }
    }
}

/// Serialize `node` as JSON.
///
/// A non-negative `indent` pretty-prints with that many spaces per level; a
/// negative one produces compact output with no whitespace.
pub fn render_json(node: &Node, indent: i32) -> serde_json::Result<String> {
    let json = JsonNode::from(node);
    if indent < 0 {
        return to_string_with(&json, CompactFormatter);
    }
    let pad = " ".repeat(indent as usize);
    to_string_with(&json, PrettyFormatter::with_indent(pad.as_bytes()))
}

fn to_string_with<F: Formatter>(json: &JsonNode<'_>, formatter: F) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    json.serialize(&mut serializer)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
