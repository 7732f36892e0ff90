use crate::compiler::registry::Registry;
use crate::error::CompileError;
use crate::graph::Block;
use crate::rules::Emitted;
use tracing::debug;

const INDENT_UNIT: &str = "    ";

/// Per-compile configuration handed in by the editor.
#[derive(Debug, Clone, Default)]
pub struct GenConfig {
    /// Text appended after every emitted statement, in every chain and every
    /// conditional branch. Rules never see it; injection happens entirely in
    /// the context. `None` or `""` means no injection.
    pub statement_suffix: Option<String>,
}

impl GenConfig {
    pub fn with_suffix(suffix: &str) -> Self {
        Self { statement_suffix: Some(suffix.to_string()) }
    }
}

/// 代码生成器：从根块遍历程序图，产出目标 DSL 文本
/// One synchronous pass per invocation; the graph is owned by the caller and
/// never mutated here.
pub struct Generator<'a> {
    registry: &'a Registry,
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Compile the graph rooted at `root`. Any failure aborts the whole
    /// pass: no partial text is returned.
    pub fn compile(&self, root: &Block, config: &GenConfig) -> Result<String, CompileError> {
        debug!(root = %root.kind, blocks = root.size(), "compiling block graph");
        let mut ctx = GenContext::new(self.registry, config.clone());
        let emitted = ctx.emit_block(root)?;
        Ok(emitted.text)
    }
}

/// Traversal state threaded through recursive rendering. Created fresh per
/// compile and discarded with the returned text.
pub struct GenContext<'a> {
    registry: &'a Registry,
    config: GenConfig,
    indent: usize,
}

impl<'a> GenContext<'a> {
    fn new(registry: &'a Registry, config: GenConfig) -> Self {
        Self { registry, config, indent: 0 }
    }

    /// Resolve and invoke the rule for one block.
    pub fn emit_block(&mut self, block: &Block) -> Result<Emitted, CompileError> {
        let registry = self.registry;
        let rule = registry.lookup(&block.kind)?;
        rule.emit(block, self)
    }

    /// Render the value expression plugged into the named socket. An empty
    /// or undeclared socket is not an error: the caller's `fallback` is
    /// substituted so half-built graphs still compile.
    pub fn render_value(
        &mut self,
        block: &Block,
        socket: &str,
        fallback: &str,
    ) -> Result<String, CompileError> {
        match block.value_socket(socket) {
            Some(child) => Ok(self.emit_block(child)?.text),
            None => Ok(fallback.to_string()),
        }
    }

    /// Flatten the statement chain plugged into the named socket. This is
    /// the only place `next` links are walked: each statement's text is laid
    /// down in link order, followed by the configured suffix.
    pub fn render_statement_chain(
        &mut self,
        block: &Block,
        socket: &str,
    ) -> Result<String, CompileError> {
        let Some(head) = block.statement_socket(socket) else {
            return Ok(String::new());
        };

        let mut out = String::new();
        let mut current = Some(head);
        while let Some(statement) = current {
            let emitted = self.emit_block(statement)?;
            out.push_str(&self.indent_prefix());
            out.push_str(&emitted.text);
            if let Some(suffix) = self.statement_suffix() {
                out.push_str(suffix);
            }
            current = statement.next.as_deref();
        }
        Ok(out)
    }

    /// Suffix to inject after each statement, if one is configured.
    pub fn statement_suffix(&self) -> Option<&str> {
        self.config
            .statement_suffix
            .as_deref()
            .filter(|suffix| !suffix.is_empty())
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Current textual indentation. Indentation is a rendering concern only;
    /// the graph itself knows nothing about it.
    pub fn indent_prefix(&self) -> String {
        INDENT_UNIT.repeat(self.indent)
    }
}
