use blockscript::graph::Block;
use blockscript::graph::builder::{BlockBuilder, chain};
use serde_json::json;

#[test]
fn test_build_block_with_sockets() {
    let block = BlockBuilder::new("compare")
        .field("OP", "EQ")
        .value_input("A", Block::new("number"))
        .empty_value_socket("B")
        .build();

    assert_eq!(block.kind, "compare");
    assert_eq!(block.field("OP"), Some(&json!("EQ")));

    // 已连接与已声明但为空的插槽
    assert!(block.has_value_socket("A"));
    assert!(block.value_socket("A").is_some());
    assert!(block.has_value_socket("B"));
    assert!(block.value_socket("B").is_none());

    // Undeclared socket
    assert!(!block.has_value_socket("C"));
    assert!(block.value_socket("C").is_none());
}

#[test]
fn test_chain_links_in_order() {
    let head = chain(vec![
        BlockBuilder::new("var").field("NAME", "a").build(),
        BlockBuilder::new("var").field("NAME", "b").build(),
        BlockBuilder::new("var").field("NAME", "c").build(),
    ])
    .expect("Chain should have a head");

    assert_eq!(head.field("NAME"), Some(&json!("a")));
    let second = head.next.as_deref().expect("Missing second link");
    assert_eq!(second.field("NAME"), Some(&json!("b")));
    let third = second.next.as_deref().expect("Missing third link");
    assert_eq!(third.field("NAME"), Some(&json!("c")));
    assert!(third.next.is_none());
}

#[test]
fn test_chain_of_nothing_has_no_head() {
    assert_eq!(chain(vec![]), None);
}

#[test]
fn test_indexed_socket_probe_stops_at_first_gap() {
    // IF0 and IF1 declared (IF1 empty), IF3 declared after a gap
    let block = BlockBuilder::new("if")
        .value_input("IF0", Block::new("null"))
        .empty_value_socket("IF1")
        .value_input("IF3", Block::new("null"))
        .build();

    // Declared-but-empty sockets count; the gap at index 2 terminates
    assert_eq!(block.indexed_socket_count("IF"), 2);
    assert_eq!(block.indexed_socket_count("ARG"), 0);
}

#[test]
fn test_block_size_counts_all_reachable() {
    let root = BlockBuilder::new("root")
        .statement_input(
            "DO",
            chain(vec![
                BlockBuilder::new("var")
                    .value_input("VALUE", Block::new("number"))
                    .build(),
                Block::new("call"),
            ])
            .unwrap(),
        )
        .build();

    // root + var + number + call
    assert_eq!(root.size(), 4);
}

#[test]
fn test_block_serde_round_trip() {
    let block = BlockBuilder::new("if")
        .value_input("IF0", BlockBuilder::new("number").field("NUM", 3).build())
        .empty_statement_socket("DO0")
        .build();

    let yaml = serde_yaml::to_string(&block).expect("Serialization failed");
    let back: Block = serde_yaml::from_str(&yaml).expect("Deserialization failed");
    assert_eq!(block, back);
}
