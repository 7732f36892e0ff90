use crate::compiler::core::GenContext;
use crate::error::CompileError;
use crate::graph::Block;
use crate::rules::{Emitted, EmissionRule, ORDER_ATOMIC};
use serde_json::Value;

/// Program root: wraps its `DO` chain as a named zero-argument procedure and
/// immediately invokes it, so the emitted text is a runnable script.
pub struct RootRule;

impl EmissionRule for RootRule {
    fn kind(&self) -> &str { "root" }

    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let name = block
            .field("NAME")
            .and_then(|v| v.as_str())
            .unwrap_or("main");
        let body = ctx.render_statement_chain(block, "DO")?;
        Ok(Emitted::statement(format!("def {name}() do\n{body}end\n{name}()")))
    }
}

/// Numeric literal from the `NUM` field. Integers render without a decimal
/// point.
pub struct NumberRule;

impl EmissionRule for NumberRule {
    fn kind(&self) -> &str { "number" }

    fn emit(&self, block: &Block, _ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let text = match block.field("NUM") {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => i.to_string(),
                None => n.to_string(),
            },
            // String fields must still hold a number; anything else falls
            // back to the numeric default rather than leaking raw text into
            // the emitted source.
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => i.to_string(),
                Err(_) => match s.trim().parse::<f64>() {
                    Ok(f) if f.is_finite() => f.to_string(),
                    _ => "0".to_string(),
                },
            },
            _ => "0".to_string(),
        };
        Ok(Emitted::value(text, ORDER_ATOMIC))
    }
}

/// String literal from the `TEXT` field. The target language has no escape
/// sequences, so embedded quotes cannot be represented and are stripped.
pub struct TextRule;

impl EmissionRule for TextRule {
    fn kind(&self) -> &str { "text" }

    fn emit(&self, block: &Block, _ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let raw = block
            .field("TEXT")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        let text = raw.replace('"', "");
        Ok(Emitted::value(format!("\"{text}\""), ORDER_ATOMIC))
    }
}

/// The fixed no-value token.
pub struct NullRule;

impl EmissionRule for NullRule {
    fn kind(&self) -> &str { "null" }

    fn emit(&self, _block: &Block, _ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        Ok(Emitted::value("null", ORDER_ATOMIC))
    }
}
