//! Data models: the node tree and its seed.

pub mod file_tree;
pub mod node;
pub mod seed;

pub use file_tree::{sibling_order, FileTree, FileTreeRow};
pub use node::{Language, Node, NodeId, NodeIdGenerator, NodeKind};
pub use seed::seed_tree;
