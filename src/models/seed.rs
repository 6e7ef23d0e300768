//! The fixed workspace every session starts from.

use super::file_tree::FileTree;
use super::node::Node;

const COUNTER_TSX: &str = r#"import React, { useState } from 'react';

export const Counter = () => {
  const [count, setCount] = useState(0);

  return (
    <div className="p-4">
      <h1>Count: {count}</h1>
      <button onClick={() => setCount(c => c + 1)}>
        Increment
      </button>
    </div>
  );
};"#;

const INDEX_CSS: &str = r#".container {
  display: flex;
  flex-direction: column;
  background: #1e1e1e;
  color: white;
}

.btn:hover {
  opacity: 0.8;
}"#;

const PACKAGE_JSON: &str = r#"{
  "name": "vscode-clone",
  "version": "1.0.0",
  "dependencies": {
    "react": "^18.2.0",
    "typescript": "^5.0.0"
  }
}"#;

pub fn seed_tree() -> FileTree {
    FileTree::new(vec![Node::folder(
        "root",
        "vscode-clone",
        vec![
            Node::folder(
                "src",
                "src",
                vec![
                    Node::folder(
                        "components",
                        "components",
                        vec![
                            Node::file(
                                "Header.tsx",
                                "Header.tsx",
                                "export const Header = () => <header>Logo</header>;",
                            ),
                            Node::file(
                                "Sidebar.tsx",
                                "Sidebar.tsx",
                                "export const Sidebar = () => <aside>Menu</aside>;",
                            ),
                        ],
                        true,
                    ),
                    Node::file("App.tsx", "App.tsx", COUNTER_TSX),
                    Node::file("index.css", "index.css", INDEX_CSS),
                    Node::file(
                        "utils.ts",
                        "utils.ts",
                        "export const add = (a, b) => a + b;",
                    ),
                ],
                true,
            ),
            Node::file("package.json", "package.json", PACKAGE_JSON),
            Node::file(
                "tsconfig.json",
                "tsconfig.json",
                r#"{ "compilerOptions": { "strict": true } }"#,
            ),
            Node::file(
                "readme.md",
                "README.md",
                "# VS Code Clone\nA simple terminal editor demo.",
            ),
        ],
        true,
    )])
}
