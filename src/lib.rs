pub mod compiler;
pub mod error;
pub mod graph;
pub mod rules;
