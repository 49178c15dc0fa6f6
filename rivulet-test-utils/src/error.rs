use thiserror::Error;

/// Minimal cloneable error for exercising failure paths in stream tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TestError(pub &'static str);
