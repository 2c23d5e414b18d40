//! Define object properties from compact flag codes.
//!
//! ```
//! use propflags::{Context, JsValue};
//!
//! let ctx = Context::new();
//! let obj = ctx.new_object();
//! ctx.define_flagged_property(&obj, "a", JsValue::Number(5.0), "ew")?;
//!
//! assert_eq!(ctx.keys(&obj), vec!["a".to_string()]);
//! assert!(ctx.set(&obj, "a", JsValue::Number(3.0))?);
//! # Ok::<(), propflags::errors::RuntimeError>(())
//! ```

pub mod context;
pub mod define;
pub mod embedding;
pub mod engine;
pub mod errors;
pub mod flags;
pub mod runtime;

pub use context::Context;
pub use define::{AccessorPair, PropertyValue, build_descriptor, define_flagged_property};
pub use engine::Engine;
pub use errors::{PropflagsError, RuntimeError};
pub use flags::{DecodedFlags, FlagSpec, PropertyFlags};
pub use runtime::value::JsValue;
pub use runtime::value::object::{JsObject, ObjectRef, PropertyDescriptor, PropertyKey};
