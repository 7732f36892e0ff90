use crate::graph::Block;
use serde_json::Value;

/// Fluent construction of a single block and its subtrees. Chains are built
/// front to back with [`chain`].
pub struct BlockBuilder {
    block: Block,
}

impl BlockBuilder {
    pub fn new(kind: &str) -> Self {
        Self { block: Block::new(kind) }
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.block.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn value_input(mut self, socket: &str, child: Block) -> Self {
        self.block.value_inputs.insert(socket.to_string(), Some(child));
        self
    }

    /// Declare a value socket without plugging anything into it.
    pub fn empty_value_socket(mut self, socket: &str) -> Self {
        self.block.value_inputs.insert(socket.to_string(), None);
        self
    }

    pub fn statement_input(mut self, socket: &str, head: Block) -> Self {
        self.block.statement_inputs.insert(socket.to_string(), Some(head));
        self
    }

    pub fn empty_statement_socket(mut self, socket: &str) -> Self {
        self.block.statement_inputs.insert(socket.to_string(), None);
        self
    }

    pub fn next(mut self, next: Block) -> Self {
        self.block.next = Some(Box::new(next));
        self
    }

    pub fn build(self) -> Block {
        self.block
    }
}

/// Link blocks into a statement chain via their `next` pointers and return
/// the head. Any `next` already set on an element is replaced.
pub fn chain(blocks: Vec<Block>) -> Option<Block> {
    let mut head: Option<Block> = None;
    for mut block in blocks.into_iter().rev() {
        block.next = head.map(Box::new);
        head = Some(block);
    }
    head
}
