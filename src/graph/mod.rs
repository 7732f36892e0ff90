pub mod builder;

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use serde_json::Value;

/// 程序图中的块 (Block)
/// A single node of the visual program. Sockets hold exclusively owned
/// subtrees, so the graph is an acyclic tree by construction; `next` links
/// statements of the same chain into a singly linked list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub kind: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    /// A key that is present with a `None` value is a declared-but-empty
    /// socket; a missing key means the block has no such socket at all.
    #[serde(default)]
    pub value_inputs: HashMap<String, Option<Block>>,
    #[serde(default)]
    pub statement_inputs: HashMap<String, Option<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Block>>,
}

impl Block {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            fields: HashMap::new(),
            value_inputs: HashMap::new(),
            statement_inputs: HashMap::new(),
            next: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn has_value_socket(&self, name: &str) -> bool {
        self.value_inputs.contains_key(name)
    }

    /// Connected block in the named value socket, if any.
    pub fn value_socket(&self, name: &str) -> Option<&Block> {
        self.value_inputs.get(name).and_then(|slot| slot.as_ref())
    }

    pub fn has_statement_socket(&self, name: &str) -> bool {
        self.statement_inputs.contains_key(name)
    }

    /// Head of the chain plugged into the named statement socket, if any.
    pub fn statement_socket(&self, name: &str) -> Option<&Block> {
        self.statement_inputs.get(name).and_then(|slot| slot.as_ref())
    }

    /// Probe `{prefix}0`, `{prefix}1`, ... among the value sockets until the
    /// first gap. This is the only place indexed-socket termination is
    /// decided; the conditional and call rules both go through it.
    pub fn indexed_socket_count(&self, prefix: &str) -> usize {
        let mut n = 0;
        while self.has_value_socket(&format!("{}{}", prefix, n)) {
            n += 1;
        }
        n
    }

    /// Number of blocks reachable through this one, itself included.
    pub fn size(&self) -> usize {
        let mut total = 1;
        for child in self.value_inputs.values().flatten() {
            total += child.size();
        }
        for child in self.statement_inputs.values().flatten() {
            total += child.size();
        }
        if let Some(next) = &self.next {
            total += next.size();
        }
        total
    }
}
