use crate::compiler::core::GenContext;
use crate::error::CompileError;
use crate::graph::Block;
use crate::rules::{Emitted, EmissionRule, ORDER_ATOMIC, ORDER_RELATIONAL};

/// Multi-branch conditional. Condition/branch pairs live in indexed sockets
/// `IF0/DO0, IF1/DO1, ...`; probing stops at the first missing `IFn`, with
/// index 0 always processed. An `ELSE` statement socket appends a trailing
/// else branch. When a statement suffix is configured, every branch body is
/// prefixed with one suffix injection (the branch-entry hook), and the else
/// branch is emitted even when it does not exist in the graph so that the
/// hook still fires when all conditions are false.
pub struct IfRule;

impl EmissionRule for IfRule {
    fn kind(&self) -> &str { "if" }

    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let pairs = block.indexed_socket_count("IF").max(1);

        let mut code = String::new();
        for n in 0..pairs {
            let cond = ctx.render_value(block, &format!("IF{n}"), "false")?;
            let mut branch = ctx.render_statement_chain(block, &format!("DO{n}"))?;
            if let Some(suffix) = ctx.statement_suffix() {
                branch.insert_str(0, suffix);
            }
            if n == 0 {
                code.push_str(&format!("if ({cond}) do\n{branch}end"));
            } else {
                code.push_str(&format!(" else if ({cond}) do\n{branch}end"));
            }
        }

        if block.has_statement_socket("ELSE") || ctx.statement_suffix().is_some() {
            let mut branch = ctx.render_statement_chain(block, "ELSE")?;
            if let Some(suffix) = ctx.statement_suffix() {
                branch.insert_str(0, suffix);
            }
            code.push_str(&format!(" else do\n{branch}end"));
        }

        code.push('\n');
        Ok(Emitted::statement(code))
    }
}

/// Binary comparison of the `A` and `B` value sockets, operator chosen by
/// the `OP` field. Missing operands default to `0`.
pub struct CompareRule;

impl EmissionRule for CompareRule {
    fn kind(&self) -> &str { "compare" }

    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let a = ctx.render_value(block, "A", "0")?;
        let b = ctx.render_value(block, "B", "0")?;
        let op = match block.field("OP").and_then(|v| v.as_str()) {
            Some("NEQ") => "!=",
            Some("LT") => "<",
            Some("LTE") => "<=",
            Some("GT") => ">",
            Some("GTE") => ">=",
            _ => "==",
        };
        Ok(Emitted::value(format!("{a} {op} {b}"), ORDER_RELATIONAL))
    }
}

/// Variable reference: emits the bare name, so declared variables can be
/// read back in conditions and call arguments.
pub struct IdentifierRule;

impl EmissionRule for IdentifierRule {
    fn kind(&self) -> &str { "identifier" }

    fn emit(&self, block: &Block, _ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let name = block
            .field("NAME")
            .and_then(|v| v.as_str())
            .unwrap_or("value");
        Ok(Emitted::value(name, ORDER_ATOMIC))
    }
}

/// Variable declaration statement: `var <NAME> = <VALUE>`.
pub struct VarRule;

impl EmissionRule for VarRule {
    fn kind(&self) -> &str { "var" }

    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let name = block
            .field("NAME")
            .and_then(|v| v.as_str())
            .unwrap_or("value");
        let value = ctx.render_value(block, "VALUE", "null")?;
        Ok(Emitted::statement(format!("var {name} = {value}\n")))
    }
}

/// Call statement: `<NAME>(<ARG0>, <ARG1>, ...)`. Arguments use the same
/// indexed-socket probe as the conditional; a declared-but-empty argument
/// socket renders as `null`.
pub struct CallRule;

impl EmissionRule for CallRule {
    fn kind(&self) -> &str { "call" }

    fn emit(&self, block: &Block, ctx: &mut GenContext) -> Result<Emitted, CompileError> {
        let name = block
            .field("NAME")
            .and_then(|v| v.as_str())
            .unwrap_or("noop");
        let argc = block.indexed_socket_count("ARG");
        let mut args = Vec::with_capacity(argc);
        for n in 0..argc {
            args.push(ctx.render_value(block, &format!("ARG{n}"), "null")?);
        }
        Ok(Emitted::statement(format!("{}({})\n", name, args.join(", "))))
    }
}
