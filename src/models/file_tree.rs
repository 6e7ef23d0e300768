//! Immutable file tree.
//!
//! Every edit returns a new [`FileTree`]. Nodes are shared through `Arc`: only the nodes on the
//! path from a top-level node down to the edited one are copied, everything else is reused from
//! the previous tree. An id that does not resolve is a silent no-op.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;

use super::node::{Language, Node, NodeId, NodeKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    roots: Vec<Arc<Node>>,
}

/// Folders before files, then by name (case-insensitive, ties broken by bytes).
pub fn sibling_order(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let la = a.name.to_lowercase();
            let lb = b.name.to_lowercase();
            la.cmp(&lb).then_with(|| a.name.cmp(&b.name))
        }
    }
}

fn sort_siblings(nodes: &mut [Arc<Node>]) {
    nodes.sort_by(|a, b| sibling_order(a, b));
}

/// Locates `id` and lets `edit` rebuild the sibling list that contains it.
///
/// `edit` receives the containing list and the index of the target. Returning `None` leaves the
/// tree untouched. Ancestors of the target are shallow-copied with their new child lists.
fn rewrite(
    nodes: &[Arc<Node>],
    id: &NodeId,
    edit: &mut dyn FnMut(&[Arc<Node>], usize) -> Option<Vec<Arc<Node>>>,
) -> Option<Vec<Arc<Node>>> {
    for (index, node) in nodes.iter().enumerate() {
        if &node.id == id {
            return edit(nodes, index);
        }

        if let NodeKind::Folder { children, expanded } = &node.kind {
            if let Some(children) = rewrite(children, id, edit) {
                let mut out = nodes.to_vec();
                out[index] = Arc::new(node.with_kind(NodeKind::Folder {
                    children,
                    expanded: *expanded,
                }));
                return Some(out);
            }
        }
    }
    None
}

fn replace_at(nodes: &[Arc<Node>], index: usize, node: Node) -> Vec<Arc<Node>> {
    let mut out = nodes.to_vec();
    out[index] = Arc::new(node);
    out
}

fn collect_ids(node: &Node, out: &mut Vec<NodeId>) {
    out.push(node.id.clone());
    for child in node.children() {
        collect_ids(child, out);
    }
}

fn find_in<'a>(nodes: &'a [Arc<Node>], id: &NodeId) -> Option<&'a Arc<Node>> {
    for node in nodes {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn path_in<'a>(nodes: &'a [Arc<Node>], id: &NodeId, path: &mut Vec<&'a Arc<Node>>) -> bool {
    for node in nodes {
        path.push(node);
        if &node.id == id || path_in(node.children(), id, path) {
            return true;
        }
        path.pop();
    }
    false
}

impl FileTree {
    pub fn new(roots: Vec<Node>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    pub fn find(&self, id: &NodeId) -> Option<&Arc<Node>> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Nodes from a top-level node down to `id`, inclusive (breadcrumb order).
    pub fn ancestors(&self, id: &NodeId) -> Option<Vec<&Arc<Node>>> {
        let mut path = Vec::new();
        path_in(&self.roots, id, &mut path).then_some(path)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&Arc<Node>> {
        let path = self.ancestors(id)?;
        let len = path.len();
        (len >= 2).then(|| path[len - 2])
    }

    /// Ids of `id` and all of its descendants, or empty if `id` does not resolve.
    pub fn subtree_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(node) = self.find(id) {
            collect_ids(node, &mut out);
        }
        out
    }

    pub fn try_toggle_folder(&self, id: &NodeId) -> Option<FileTree> {
        let roots = rewrite(&self.roots, id, &mut |siblings, index| {
            let node = &siblings[index];
            let NodeKind::Folder { children, expanded } = &node.kind else {
                return None;
            };
            let toggled = node.with_kind(NodeKind::Folder {
                children: children.clone(),
                expanded: !expanded,
            });
            Some(replace_at(siblings, index, toggled))
        });
        roots.map(|roots| FileTree { roots })
    }

    pub fn try_update_content(&self, id: &NodeId, content: &str) -> Option<FileTree> {
        let roots = rewrite(&self.roots, id, &mut |siblings, index| {
            let node = &siblings[index];
            if node.content()? == content {
                return None;
            }
            let updated = node.with_kind(NodeKind::File {
                content: content.to_string(),
            });
            Some(replace_at(siblings, index, updated))
        });
        roots.map(|roots| FileTree { roots })
    }

    /// Appends `node` under the folder `parent_id`, re-sorts that folder and expands it.
    ///
    /// Refused when the parent is not a folder or when any id inside `node` already exists.
    pub fn try_insert_node(&self, parent_id: &NodeId, node: Node) -> Option<FileTree> {
        let mut incoming = Vec::new();
        collect_ids(&node, &mut incoming);
        let unique: FxHashSet<&NodeId> = incoming.iter().collect();
        if unique.len() != incoming.len() || incoming.iter().any(|id| self.contains(id)) {
            return None;
        }

        let node = Arc::new(node);
        let roots = rewrite(&self.roots, parent_id, &mut |siblings, index| {
            let parent = &siblings[index];
            let NodeKind::Folder { children, .. } = &parent.kind else {
                return None;
            };
            let mut children = children.clone();
            children.push(node.clone());
            sort_siblings(&mut children);
            let updated = parent.with_kind(NodeKind::Folder {
                children,
                expanded: true,
            });
            Some(replace_at(siblings, index, updated))
        });
        roots.map(|roots| FileTree { roots })
    }

    pub fn try_delete_node(&self, id: &NodeId) -> Option<FileTree> {
        let roots = rewrite(&self.roots, id, &mut |siblings, index| {
            let mut out = siblings.to_vec();
            out.remove(index);
            Some(out)
        });
        roots.map(|roots| FileTree { roots })
    }

    /// Renames a node and re-sorts the list it lives in.
    pub fn try_rename_node(&self, id: &NodeId, new_name: &str) -> Option<FileTree> {
        let roots = rewrite(&self.roots, id, &mut |siblings, index| {
            let node = &siblings[index];
            if node.name.as_str() == new_name {
                return None;
            }
            let mut out = replace_at(siblings, index, node.with_name(CompactString::new(new_name)));
            sort_siblings(&mut out);
            Some(out)
        });
        roots.map(|roots| FileTree { roots })
    }

    pub fn toggle_folder(&self, id: &NodeId) -> FileTree {
        self.try_toggle_folder(id).unwrap_or_else(|| self.clone())
    }

    pub fn update_content(&self, id: &NodeId, content: &str) -> FileTree {
        self.try_update_content(id, content)
            .unwrap_or_else(|| self.clone())
    }

    pub fn insert_node(&self, parent_id: &NodeId, node: Node) -> FileTree {
        self.try_insert_node(parent_id, node)
            .unwrap_or_else(|| self.clone())
    }

    pub fn delete_node(&self, id: &NodeId) -> FileTree {
        self.try_delete_node(id).unwrap_or_else(|| self.clone())
    }

    pub fn rename_node(&self, id: &NodeId, new_name: &str) -> FileTree {
        self.try_rename_node(id, new_name)
            .unwrap_or_else(|| self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_dir: bool,
    pub is_expanded: bool,
    pub language: Language,
}

impl FileTree {
    /// Visible rows in display order: children of collapsed folders are skipped.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(&Arc<Node>, u16)> =
            self.roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            result.push(FileTreeRow {
                id: node.id.clone(),
                depth,
                name: node.name.clone(),
                is_dir: node.is_folder(),
                is_expanded: node.is_expanded(),
                language: node.language(),
            });

            if node.is_expanded() {
                for child in node.children().iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
