use thiserror::Error;

/// Errors raised by the binding layer. None of these describe bad user
/// data; they mean a control is wired to the wrong place.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("no such action command: {0}")]
    UnknownTag(String),
    #[error("no such text field: {0}")]
    UnknownField(String),
    #[error("{tag} cannot take {item}")]
    ItemMismatch { tag: &'static str, item: String },
    #[error("{value} is not an option of {tag}")]
    NotAnOption { tag: &'static str, value: String },
    #[error("cannot read options: {0}")]
    Options(#[from] std::io::Error),
    #[error("malformed options file: {0}")]
    OptionsFormat(#[from] serde_json::Error),
}
