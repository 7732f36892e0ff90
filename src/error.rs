use thiserror::Error;

/// 编译错误分类
/// Both variants abort the whole compile: no partial text is ever returned,
/// the caller keeps the previous valid output and retries after fixing the graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("unknown block kind: {0}")]
    UnknownBlockKind(String),

    #[error("malformed socket reference: {0}")]
    MalformedSocketReference(String),
}
