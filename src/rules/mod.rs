pub mod common;
pub mod flow;

use crate::compiler::core::GenContext;
use crate::error::CompileError;
use crate::graph::Block;

/// Order markers recorded on every emitted value. No current rule reads them
/// back; they are kept on the contract so precedence-aware emission can be
/// added without touching every rule.
pub const ORDER_ATOMIC: u8 = 0;
pub const ORDER_RELATIONAL: u8 = 6;
pub const ORDER_NONE: u8 = 99;

/// Text fragment produced by one rule invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub text: String,
    pub order: u8,
}

impl Emitted {
    pub fn value(text: impl Into<String>, order: u8) -> Self {
        Self { text: text.into(), order }
    }

    /// Statement rules carry no meaningful order.
    pub fn statement(text: impl Into<String>) -> Self {
        Self { text: text.into(), order: ORDER_NONE }
    }
}

/// 发射规则接口：每种块类型实现此 Trait
/// A rule never walks `next` or sockets itself; it recurses only through the
/// two context primitives, so every block is visited at most once per compile.
pub trait EmissionRule: Send + Sync {
    fn kind(&self) -> &str;
    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError>;
}
