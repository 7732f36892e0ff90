use std::collections::{HashMap, HashSet};
use std::fs;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Serialize, Deserialize};
use serde_json::Value;
use tracing::{debug, warn};
use crate::error::CompileError;
use crate::graph::Block;

/// 磁盘上的程序图文档（编辑器导出的扁平形式）
/// Blocks are stored flat with string ids; sockets and `next` reference ids.
/// [`resolve`] turns the flat form into the owned [`Block`] tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDoc {
    pub root: String,
    pub blocks: Vec<BlockDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockDoc {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    /// Socket name to target id; an explicit null keeps the socket declared
    /// but empty.
    #[serde(default)]
    pub value_inputs: HashMap<String, Option<String>>,
    #[serde(default)]
    pub statement_inputs: HashMap<String, Option<String>>,
    #[serde(default)]
    pub next: Option<String>,
}

pub fn load_graph_from_yaml(file_path: &str) -> Result<Block> {
    let yaml_content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read YAML file from {}", file_path))?;

    let doc: GraphDoc = serde_yaml::from_str(&yaml_content)
        .with_context(|| format!("Failed to deserialize YAML content from {}", file_path))?;

    let root = resolve(&doc)
        .with_context(|| format!("Failed to resolve block graph from {}", file_path))?;

    Ok(root)
}

/// Build the owned tree rooted at `doc.root`. Duplicate ids, references to
/// missing ids, and ids consumed by more than one socket or `next` link
/// (sharing, or a cycle in the flat form) are all malformed: ownership in
/// the tree is exclusive.
pub fn resolve(doc: &GraphDoc) -> Result<Block, CompileError> {
    let mut index: HashMap<&str, &BlockDoc> = HashMap::new();
    for block in &doc.blocks {
        if index.insert(block.id.as_str(), block).is_some() {
            return Err(CompileError::MalformedSocketReference(format!(
                "duplicate block id: {}",
                block.id
            )));
        }
    }

    let mut resolver = Resolver { index, used: HashSet::new() };
    let root = resolver.resolve_block(&doc.root)?;

    let unreachable = doc.blocks.len() - resolver.used.len();
    if unreachable > 0 {
        warn!(unreachable, "ignoring blocks not reachable from the root");
    }
    debug!(blocks = resolver.used.len(), root = %doc.root, "resolved block graph");

    Ok(root)
}

struct Resolver<'a> {
    index: HashMap<&'a str, &'a BlockDoc>,
    used: HashSet<&'a str>,
}

impl<'a> Resolver<'a> {
    fn resolve_block(&mut self, id: &str) -> Result<Block, CompileError> {
        let Some(doc) = self.index.get(id).copied() else {
            return Err(CompileError::MalformedSocketReference(format!(
                "no block with id: {id}"
            )));
        };
        if !self.used.insert(doc.id.as_str()) {
            return Err(CompileError::MalformedSocketReference(format!(
                "block {id} is referenced more than once"
            )));
        }

        let mut block = Block::new(&doc.kind);
        block.fields = doc.fields.clone();

        for (socket, target) in &doc.value_inputs {
            let child = match target {
                Some(target_id) => Some(self.resolve_block(target_id)?),
                None => None,
            };
            block.value_inputs.insert(socket.clone(), child);
        }
        for (socket, target) in &doc.statement_inputs {
            let child = match target {
                Some(target_id) => Some(self.resolve_block(target_id)?),
                None => None,
            };
            block.statement_inputs.insert(socket.clone(), child);
        }
        if let Some(next_id) = &doc.next {
            block.next = Some(Box::new(self.resolve_block(next_id)?));
        }

        Ok(block)
    }
}
