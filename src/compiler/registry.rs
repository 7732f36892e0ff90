use std::collections::HashMap;
use crate::error::CompileError;
use crate::rules::EmissionRule;
use crate::rules::common::{NullRule, NumberRule, RootRule, TextRule};
use crate::rules::flow::{CallRule, CompareRule, IdentifierRule, IfRule, VarRule};

/// Registry for emission rules, keyed by block kind. Populated once before
/// the first compile and read-only afterwards; re-registering a kind
/// overwrites the previous rule so built-ins can be replaced.
pub struct Registry {
    rules: HashMap<String, Box<dyn EmissionRule>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { rules: HashMap::new() }
    }

    /// All built-in kinds registered, ready to compile editor graphs.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RootRule));
        registry.register(Box::new(IfRule));
        registry.register(Box::new(CompareRule));
        registry.register(Box::new(NumberRule));
        registry.register(Box::new(TextRule));
        registry.register(Box::new(NullRule));
        registry.register(Box::new(VarRule));
        registry.register(Box::new(IdentifierRule));
        registry.register(Box::new(CallRule));
        registry
    }

    pub fn register(&mut self, rule: Box<dyn EmissionRule>) {
        self.rules.insert(rule.kind().to_string(), rule);
    }

    pub fn lookup(&self, kind: &str) -> Result<&dyn EmissionRule, CompileError> {
        self.rules
            .get(kind)
            .map(|rule| rule.as_ref())
            .ok_or_else(|| CompileError::UnknownBlockKind(kind.to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
