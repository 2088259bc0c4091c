use thiserror::Error;

use super::value::{Place, Value};

/// Everything that can go wrong interpreting a program. All of it ends up
/// as text in the output pane.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("parse error: {0}")]
    Parse(#[from] syn::Error),
    #[error("cannot find place `{0}`")]
    UnknownPlace(Place),
    #[error("attempting to read undefined place `{0}`")]
    UndefinedPlace(Place),
    #[error("cannot dereference `{0}`: not a reference")]
    NotAReference(Value),
    #[error("unsupported {kind}: `{code}`")]
    Unsupported { kind: &'static str, code: String },
}
