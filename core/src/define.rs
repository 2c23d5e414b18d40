//! Attach a property using a [`FlagSpec`] instead of a spelled-out descriptor.

use std::rc::Rc;

use crate::errors::RuntimeError;
use crate::flags::{FlagSpec, PropertyFlags};
use crate::runtime::value::JsValue;
use crate::runtime::value::object::{ObjectRef, PropertyDescriptor, PropertyKey, prototype};

/// Getter and setter slots for an accessor property. Each slot is
/// independent; an empty slot is left out of the descriptor entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessorPair {
    pub get: Option<JsValue>,
    pub set: Option<JsValue>,
}

impl AccessorPair {
    pub fn new(get: Option<JsValue>, set: Option<JsValue>) -> Self {
        Self { get, set }
    }

    pub fn getter(get: JsValue) -> Self {
        Self::new(Some(get), None)
    }

    pub fn setter(set: JsValue) -> Self {
        Self::new(None, Some(set))
    }

    /// The pair as a two-element array, `undefined` standing in for an empty slot.
    pub fn to_array(&self) -> JsValue {
        JsValue::array(vec![
            self.get.clone().unwrap_or(JsValue::Undefined),
            self.set.clone().unwrap_or(JsValue::Undefined),
        ])
    }
}

/// What to store: a plain value, or a getter/setter pair.
///
/// The shape is the caller's choice and is not checked against the accessor
/// bit. A plain value under the accessor bit supplies `value[0]` and
/// `value[1]` as the pair, and a pair under a data spec is stored as an array.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Value(JsValue),
    Accessors(AccessorPair),
}

impl PropertyValue {
    fn into_accessors(self) -> Result<AccessorPair, RuntimeError> {
        match self {
            PropertyValue::Accessors(pair) => Ok(pair),
            PropertyValue::Value(value) => {
                let slot = |index: usize| -> Result<Option<JsValue>, RuntimeError> {
                    Ok(Some(index_slot(&value, index)?).filter(JsValue::to_boolean))
                };
                Ok(AccessorPair::new(slot(0)?, slot(1)?))
            }
        }
    }

    fn into_value(self) -> JsValue {
        match self {
            PropertyValue::Value(value) => value,
            PropertyValue::Accessors(pair) => pair.to_array(),
        }
    }
}

/// `value[index]`: array elements, string characters, and object keys
/// `"0"`/`"1"` (getters included). Other values have no such property.
fn index_slot(value: &JsValue, index: usize) -> Result<JsValue, RuntimeError> {
    match value {
        JsValue::Undefined | JsValue::Null => Err(RuntimeError::TypeError {
            message: format!("cannot read properties of {value} (reading '{index}')"),
        }),
        JsValue::Array(arr) => Ok(arr.borrow().get(index)),
        JsValue::String(s) => Ok(s
            .chars()
            .nth(index)
            .map_or(JsValue::Undefined, |c| JsValue::String(c.to_string()))),
        JsValue::Object(obj) => prototype::get(obj, &PropertyKey::from(index.to_string())),
        _ => Ok(JsValue::Undefined),
    }
}

impl From<JsValue> for PropertyValue {
    fn from(value: JsValue) -> Self {
        PropertyValue::Value(value)
    }
}

impl From<AccessorPair> for PropertyValue {
    fn from(pair: AccessorPair) -> Self {
        PropertyValue::Accessors(pair)
    }
}

/// Build the complete descriptor `flags` describes for `value`.
///
/// Fails only when the accessor bit asks for slots of `undefined` or `null`.
pub fn build_descriptor(
    value: impl Into<PropertyValue>,
    flags: impl Into<FlagSpec>,
) -> Result<PropertyDescriptor, RuntimeError> {
    let flags = flags.into().resolve();
    let value = value.into();

    let desc = if flags.is_accessor() {
        let pair = value.into_accessors()?;
        PropertyDescriptor::accessor(
            pair.get.filter(JsValue::to_boolean),
            pair.set.filter(JsValue::to_boolean),
        )
    } else {
        PropertyDescriptor::data(value.into_value()).with_writable(flags.is_writable())
    };

    Ok(desc
        .with_enumerable(flags.is_enumerable())
        .with_configurable(flags.is_configurable()))
}

/// Define `key` on `target` as `flags` describes and hand `target` back.
///
/// Errors come straight from reading the accessor slots or from the object's
/// define-property operation, e.g. [`RuntimeError::Redefine`] when `key`
/// already exists and is non-configurable.
pub fn define_flagged_property(
    target: &ObjectRef,
    key: impl Into<PropertyKey>,
    value: impl Into<PropertyValue>,
    flags: impl Into<FlagSpec>,
) -> Result<ObjectRef, RuntimeError> {
    let key = key.into();
    let flags: PropertyFlags = flags.into().resolve();
    let desc = build_descriptor(value, flags)?;

    tracing::trace!(%key, %flags, "defining flagged property");
    target.borrow_mut().define_own_property(key, desc)?;
    Ok(Rc::clone(target))
}
