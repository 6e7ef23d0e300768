use super::*;

#[test]
fn language_from_extension() {
    assert_eq!(Language::from_name("App.tsx"), Language::TypeScript);
    assert_eq!(Language::from_name("utils.TS"), Language::TypeScript);
    assert_eq!(Language::from_name("index.css"), Language::Css);
    assert_eq!(Language::from_name("package.json"), Language::Json);
    assert_eq!(Language::from_name("README.md"), Language::Markdown);
    assert_eq!(Language::from_name("Makefile"), Language::PlainText);
    assert_eq!(Language::from_name("notes.txt"), Language::PlainText);
}

#[test]
fn language_labels() {
    assert_eq!(Language::TypeScript.label(), "TypeScript JSX");
    assert_eq!(Language::PlainText.label(), "Plain Text");
    assert!(Language::TypeScript.colors_components());
    assert!(!Language::Css.colors_components());
}

#[test]
fn file_and_folder_accessors() {
    let file = Node::file("f", "f.ts", "body");
    assert!(!file.is_folder());
    assert_eq!(file.content(), Some("body"));
    assert!(file.children().is_empty());

    let folder = Node::folder("d", "d", vec![file], true);
    assert!(folder.is_folder());
    assert!(folder.is_expanded());
    assert_eq!(folder.content(), None);
    assert_eq!(folder.children().len(), 1);
}

#[test]
fn generated_ids_are_distinct_and_prefixed() {
    let mut ids = NodeIdGenerator::new();
    let a = ids.next_id("foo.ts");
    let b = ids.next_id("foo.ts");
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("foo.ts-"));
}

#[test]
fn fresh_id_skips_taken_ids() {
    let mut ids = NodeIdGenerator::new();
    let mut rejected = 0;
    let id = ids.fresh_id("x", |_| {
        rejected += 1;
        rejected < 3
    });
    assert!(id.as_str().ends_with("-3"));
}
