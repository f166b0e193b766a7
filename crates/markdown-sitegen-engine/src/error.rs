/// Failures raised while converting a document or rendering its tree.
///
/// None of these are recoverable inside the pipeline: the first one detected
/// aborts the whole conversion and is returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
    #[error("delimiter \"{delimiter}\" is not closed in: {text}")]
    UnterminatedDelimiter { delimiter: String, text: String },
    #[error("document has no top-level h1 heading")]
    NoTitleFound,
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
