use blockscript::compiler::core::{GenConfig, Generator};
use blockscript::compiler::loader::{self, GraphDoc};
use blockscript::compiler::registry::Registry;
use blockscript::error::CompileError;
use std::fs;

fn parse(yaml: &str) -> GraphDoc {
    serde_yaml::from_str(yaml).expect("Failed to deserialize graph document")
}

#[test]
fn test_load_simple_yaml_graph() {
    let yaml_content = r#"
root: "root"
blocks:
  - id: "root"
    kind: "root"
    statement_inputs:
      DO: "greet"
  - id: "greet"
    kind: "call"
    fields:
      NAME: "log"
    value_inputs:
      ARG0: "msg"
  - id: "msg"
    kind: "text"
    fields:
      TEXT: "hello"
"#;

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("graph.yaml");
    fs::write(&file_path, yaml_content).expect("Failed to write temp file");

    let root = loader::load_graph_from_yaml(&file_path.to_string_lossy())
        .expect("Failed to load graph from YAML");

    let registry = Registry::with_builtins();
    let code = Generator::new(&registry)
        .compile(&root, &GenConfig::default())
        .expect("Compilation failed");
    assert_eq!(code, "def main() do\nlog(\"hello\")\nend\nmain()");

    // Cleanup
    temp_dir.close().expect("Failed to close temp dir");
}

#[test]
fn test_resolve_links_next_chain() {
    let doc = parse(
        r#"
root: "root"
blocks:
  - id: "root"
    kind: "root"
    statement_inputs:
      DO: "first"
  - id: "first"
    kind: "call"
    fields: { NAME: "a" }
    next: "second"
  - id: "second"
    kind: "call"
    fields: { NAME: "b" }
"#,
    );

    let root = loader::resolve(&doc).expect("Resolution failed");
    let head = root.statement_socket("DO").expect("Missing chain head");
    assert_eq!(head.field("NAME"), Some(&serde_json::json!("a")));
    let second = head.next.as_deref().expect("Missing second link");
    assert_eq!(second.field("NAME"), Some(&serde_json::json!("b")));
}

#[test]
fn test_resolve_keeps_empty_sockets_declared() {
    let doc = parse(
        r#"
root: "cond"
blocks:
  - id: "cond"
    kind: "if"
    value_inputs:
      IF0: ~
    statement_inputs:
      DO0: ~
"#,
    );

    let root = loader::resolve(&doc).expect("Resolution failed");
    assert!(root.has_value_socket("IF0"));
    assert!(root.value_socket("IF0").is_none());
    assert!(root.has_statement_socket("DO0"));
}

#[test]
fn test_duplicate_id_is_malformed() {
    let doc = parse(
        r#"
root: "a"
blocks:
  - id: "a"
    kind: "root"
  - id: "a"
    kind: "null"
"#,
    );

    assert_eq!(
        loader::resolve(&doc),
        Err(CompileError::MalformedSocketReference(
            "duplicate block id: a".to_string()
        ))
    );
}

#[test]
fn test_dangling_reference_is_malformed() {
    let doc = parse(
        r#"
root: "root"
blocks:
  - id: "root"
    kind: "root"
    statement_inputs:
      DO: "ghost"
"#,
    );

    assert_eq!(
        loader::resolve(&doc),
        Err(CompileError::MalformedSocketReference(
            "no block with id: ghost".to_string()
        ))
    );
}

#[test]
fn test_shared_block_is_malformed() {
    // Ownership is exclusive: the same literal cannot be plugged into two sockets
    let doc = parse(
        r#"
root: "cmp"
blocks:
  - id: "cmp"
    kind: "compare"
    value_inputs:
      A: "n"
      B: "n"
  - id: "n"
    kind: "number"
    fields: { NUM: 1 }
"#,
    );

    assert_eq!(
        loader::resolve(&doc),
        Err(CompileError::MalformedSocketReference(
            "block n is referenced more than once".to_string()
        ))
    );
}

#[test]
fn test_unreachable_blocks_are_ignored() {
    let doc = parse(
        r#"
root: "root"
blocks:
  - id: "root"
    kind: "root"
  - id: "orphan"
    kind: "null"
"#,
    );

    let root = loader::resolve(&doc).expect("Resolution failed");
    assert_eq!(root.size(), 1);
}
