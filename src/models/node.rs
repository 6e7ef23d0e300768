//! Tree node model: ids, node kinds and the cosmetic language tag.

use compact_str::{format_compact, CompactString};
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(CompactString);

impl NodeId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    JavaScript,
    Css,
    Json,
    Markdown,
    PlainText,
}

impl Language {
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Language::PlainText;
        };
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "tsx" => Language::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "css" => Language::Css,
            "json" => Language::Json,
            "md" | "markdown" => Language::Markdown,
            _ => Language::PlainText,
        }
    }

    /// Label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript JSX",
            Language::JavaScript => "JavaScript",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::PlainText => "Plain Text",
        }
    }

    /// Whether bare capitalized identifiers are colored as components/classes.
    pub fn colors_components(self) -> bool {
        matches!(self, Language::TypeScript | Language::JavaScript)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File {
        content: String,
    },
    Folder {
        children: Vec<Arc<Node>>,
        expanded: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: CompactString,
    pub kind: NodeKind,
}

impl Node {
    pub fn file(
        id: impl Into<NodeId>,
        name: impl Into<CompactString>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    pub fn folder(
        id: impl Into<NodeId>,
        name: impl Into<CompactString>,
        children: Vec<Node>,
        expanded: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder {
                children: children.into_iter().map(Arc::new).collect(),
                expanded,
            },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { expanded: true, .. })
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content.as_str()),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[Arc<Node>] {
        match &self.kind {
            NodeKind::Folder { children, .. } => children.as_slice(),
            NodeKind::File { .. } => &[],
        }
    }

    pub fn language(&self) -> Language {
        Language::from_name(&self.name)
    }

    pub(crate) fn with_name(&self, name: CompactString) -> Self {
        Self {
            id: self.id.clone(),
            name,
            kind: self.kind.clone(),
        }
    }

    pub(crate) fn with_kind(&self, kind: NodeKind) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            kind,
        }
    }
}

/// Hands out `"{name}-{unix_millis}-{seq}"` ids for newly created nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    seq: u64,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, name: &str) -> NodeId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.seq = self.seq.wrapping_add(1);
        NodeId(format_compact!("{name}-{millis}-{}", self.seq))
    }

    /// Like [`next_id`](Self::next_id), skipping ids for which `taken` returns true.
    pub fn fresh_id(&mut self, name: &str, mut taken: impl FnMut(&NodeId) -> bool) -> NodeId {
        loop {
            let id = self.next_id(name);
            if !taken(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/node.rs"]
mod tests;
