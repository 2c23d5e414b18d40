use std::rc::Rc;

use super::{ObjectRef, Property, PropertyKey, PropertySlot};
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

/// Find `key` on `obj` or its prototype chain, returning the holder and a
/// snapshot of the property. No borrow outlives the call.
pub fn lookup(obj: &ObjectRef, key: &PropertyKey) -> Option<(ObjectRef, Property)> {
    let mut current = Some(Rc::clone(obj));
    while let Some(candidate) = current {
        let (found, next) = {
            let borrowed = candidate.borrow();
            (borrowed.get_own(key).cloned(), borrowed.prototype.clone())
        };
        if let Some(prop) = found {
            return Some((candidate, prop));
        }
        current = next;
    }
    None
}

pub fn has_property(obj: &ObjectRef, key: &PropertyKey) -> bool {
    lookup(obj, key).is_some()
}

/// `[[Get]]` with `obj` as the receiver: values come back as stored, getters
/// are called with `this = obj`, a missing getter or key reads as `undefined`.
pub fn get(obj: &ObjectRef, key: &PropertyKey) -> Result<JsValue, RuntimeError> {
    let Some((_, prop)) = lookup(obj, key) else {
        return Ok(JsValue::Undefined);
    };
    match prop.slot {
        PropertySlot::Data { value, .. } => Ok(value),
        PropertySlot::Accessor {
            get: Some(getter), ..
        } => getter.call(JsValue::Object(Rc::clone(obj)), Vec::new()),
        PropertySlot::Accessor { get: None, .. } => Ok(JsValue::Undefined),
    }
}
