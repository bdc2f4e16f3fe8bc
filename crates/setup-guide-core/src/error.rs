#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuideError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("unknown navigation direction: {0}")]
    UnknownDirection(String),
    #[error("method number must be at least 1")]
    InvalidMethod,
    #[error("config is not valid JSON: {0}")]
    ConfigParse(String),
    #[error("config field `{field}` is out of range: {reason}")]
    ConfigRange {
        field: &'static str,
        reason: &'static str,
    },
}
