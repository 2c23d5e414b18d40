pub mod array;
mod coercion;
mod display;
pub mod object;
pub mod symbol;

pub use coercion::same_value;

use std::cell::RefCell;
use std::rc::Rc;

use crate::embedding::callback::NativeFunctionBoxed;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use array::JsArray;
use object::{JsObject, ObjectRef};
use symbol::JsSymbol;

#[derive(Debug, Clone)]
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Symbol(JsSymbol),
    NativeFunction {
        name: String,
        handler: NativeFunctionBoxed,
    },
    Object(ObjectRef),
    Array(Rc<RefCell<JsArray>>),
}

impl JsValue {
    /// Wrap a closure as a callable value.
    pub fn native<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<JsValue, RuntimeError> + 'static,
    {
        JsValue::NativeFunction {
            name: name.into(),
            handler: NativeFunctionBoxed::from_closure(callback),
        }
    }

    pub fn array(elements: Vec<JsValue>) -> Self {
        JsValue::Array(JsArray::new(elements).wrapped())
    }

    pub fn object(obj: JsObject) -> Self {
        JsValue::Object(obj.wrapped())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, JsValue::NativeFunction { .. })
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Invoke a callable value. Calling anything else is a type error.
    pub fn call(&self, this: JsValue, args: Vec<JsValue>) -> Result<JsValue, RuntimeError> {
        match self {
            JsValue::NativeFunction { handler, .. } => handler.call(FunctionArgs::new(this, args)),
            other => Err(RuntimeError::TypeError {
                message: format!("{} is not a function", other.to_js_string()),
            }),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (
                JsValue::NativeFunction { handler: a, .. },
                JsValue::NativeFunction { handler: b, .. },
            ) => a.ptr_eq(b),
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsValue::Array(a), JsValue::Array(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        JsValue::Boolean(value)
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        JsValue::Number(value)
    }
}

impl From<i32> for JsValue {
    fn from(value: i32) -> Self {
        JsValue::Number(value.into())
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::String(value.to_string())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::String(value)
    }
}

impl From<ObjectRef> for JsValue {
    fn from(value: ObjectRef) -> Self {
        JsValue::Object(value)
    }
}
