use std::rc::Rc;

use crate::define::{self, PropertyValue};
use crate::errors::RuntimeError;
use crate::flags::FlagSpec;
use crate::runtime::value::JsValue;
use crate::runtime::value::object::{
    JsObject, ObjectRef, PropertyDescriptor, PropertyKey, PropertySlot, prototype,
};

/// Entry point for property operations that depend on evaluation mode.
#[derive(Debug, Clone)]
pub struct Context {
    strict: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::new_with_strict(true)
    }

    pub fn new_with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn new_object(&self) -> ObjectRef {
        JsObject::new().wrapped()
    }

    pub fn define_flagged_property(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
        flags: impl Into<FlagSpec>,
    ) -> Result<ObjectRef, RuntimeError> {
        define::define_flagged_property(target, key, value, flags)
    }

    /// `Object.defineProperty` with an already-built descriptor.
    pub fn define_property(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
        desc: PropertyDescriptor,
    ) -> Result<ObjectRef, RuntimeError> {
        target.borrow_mut().define_own_property(key.into(), desc)?;
        Ok(Rc::clone(target))
    }

    /// `Object.defineProperty` with a descriptor given as an object.
    pub fn define_property_from_object(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
        descriptor: &ObjectRef,
    ) -> Result<ObjectRef, RuntimeError> {
        let desc = self.to_property_descriptor(descriptor)?;
        self.define_property(target, key, desc)
    }

    /// Read a descriptor object field by field. Only fields the object
    /// actually has (own or inherited) end up present.
    pub fn to_property_descriptor(
        &self,
        obj: &ObjectRef,
    ) -> Result<PropertyDescriptor, RuntimeError> {
        let field = |name: &str| -> Result<Option<JsValue>, RuntimeError> {
            let key = PropertyKey::from(name);
            if prototype::has_property(obj, &key) {
                self.get(obj, key).map(Some)
            } else {
                Ok(None)
            }
        };

        Ok(PropertyDescriptor {
            enumerable: field("enumerable")?.map(|v| v.to_boolean()),
            configurable: field("configurable")?.map(|v| v.to_boolean()),
            value: field("value")?,
            writable: field("writable")?.map(|v| v.to_boolean()),
            get: field("get")?,
            set: field("set")?,
        })
    }

    /// `[[Get]]` with `target` as the receiver.
    pub fn get(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
    ) -> Result<JsValue, RuntimeError> {
        prototype::get(target, &key.into())
    }

    /// Assignment `target[key] = value`. Returns whether the write took
    /// effect; a rejected write is an error in strict mode.
    pub fn set(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
        value: JsValue,
    ) -> Result<bool, RuntimeError> {
        let key = key.into();
        match prototype::lookup(target, &key).map(|(_, prop)| prop.slot) {
            Some(PropertySlot::Accessor {
                set: Some(setter), ..
            }) => {
                setter.call(JsValue::Object(Rc::clone(target)), vec![value])?;
                Ok(true)
            }
            Some(PropertySlot::Accessor { set: None, .. }) => {
                self.reject(RuntimeError::GetterOnly { key })
            }
            Some(PropertySlot::Data { writable: false, .. }) => {
                self.reject(RuntimeError::ReadOnly { key })
            }
            Some(PropertySlot::Data { writable: true, .. }) | None => {
                let desc = if target.borrow().has_own(&key) {
                    PropertyDescriptor::data(value)
                } else {
                    PropertyDescriptor::data(value)
                        .with_writable(true)
                        .with_enumerable(true)
                        .with_configurable(true)
                };
                let result = target.borrow_mut().define_own_property(key, desc);
                match result {
                    Ok(()) => Ok(true),
                    Err(err) => self.reject(err),
                }
            }
        }
    }

    /// `delete target[key]`.
    pub fn delete(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
    ) -> Result<bool, RuntimeError> {
        let key = key.into();
        if target.borrow_mut().delete(&key) {
            Ok(true)
        } else {
            self.reject(RuntimeError::NotDeletable { key })
        }
    }

    pub fn get_own_property_descriptor(
        &self,
        target: &ObjectRef,
        key: impl Into<PropertyKey>,
    ) -> Option<PropertyDescriptor> {
        target
            .borrow()
            .get_own(&key.into())
            .map(PropertyDescriptor::from_property)
    }

    pub fn has_own_property(&self, target: &ObjectRef, key: impl Into<PropertyKey>) -> bool {
        target.borrow().has_own(&key.into())
    }

    pub fn property_is_enumerable(&self, target: &ObjectRef, key: impl Into<PropertyKey>) -> bool {
        target
            .borrow()
            .get_own(&key.into())
            .is_some_and(|prop| prop.enumerable)
    }

    /// `Object.keys`: own enumerable string keys in insertion order.
    pub fn keys(&self, target: &ObjectRef) -> Vec<String> {
        target
            .borrow()
            .iter()
            .filter(|(_, prop)| prop.enumerable)
            .filter_map(|(key, _)| key.as_str().map(str::to_string))
            .collect()
    }

    pub fn prevent_extensions(&self, target: &ObjectRef) {
        target.borrow_mut().prevent_extensions();
    }

    fn reject(&self, err: RuntimeError) -> Result<bool, RuntimeError> {
        if self.strict {
            return Err(err);
        }
        tracing::debug!(error = %err, "ignoring rejected operation outside strict mode");
        Ok(false)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
