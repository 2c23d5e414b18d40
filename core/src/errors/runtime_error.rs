use miette::Diagnostic;
use thiserror::Error;

use crate::runtime::value::object::PropertyKey;

#[derive(Debug, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("cannot redefine property: {key}")]
    #[diagnostic(help("the existing property is non-configurable"))]
    Redefine { key: PropertyKey },

    #[error("cannot define property {key}, object is not extensible")]
    NotExtensible { key: PropertyKey },

    #[error(
        "invalid property descriptor: cannot both specify accessors and a value or writable attribute"
    )]
    InvalidDescriptor,

    #[error("{role} for property {key} must be a function")]
    NotCallable { role: &'static str, key: PropertyKey },

    #[error("cannot assign to read only property '{key}'")]
    #[diagnostic(help("define the property with the 'w' flag to allow writes"))]
    ReadOnly { key: PropertyKey },

    #[error("cannot set property {key} which has only a getter")]
    GetterOnly { key: PropertyKey },

    #[error("cannot delete property '{key}'")]
    NotDeletable { key: PropertyKey },

    #[error("type error: {message}")]
    TypeError { message: String },
}
