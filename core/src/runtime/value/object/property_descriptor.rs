use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

use super::property::{Property, PropertySlot};
use super::{JsObject, PropertyKey};

/// A possibly partial description of a property, as passed to
/// `Object.defineProperty`.
///
/// `None` means the field is absent. For `get`/`set` an absent field is
/// not the same as `Some(JsValue::Undefined)`: when redefining an existing
/// accessor, absence keeps the current function while an explicit
/// `undefined` removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDescriptor {
    pub value: Option<JsValue>,
    pub writable: Option<bool>,
    pub get: Option<JsValue>,
    pub set: Option<JsValue>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    pub fn data(value: JsValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn accessor(get: Option<JsValue>, set: Option<JsValue>) -> Self {
        Self {
            get,
            set,
            ..Self::default()
        }
    }

    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    pub fn is_accessor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_data(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_generic(&self) -> bool {
        !self.is_accessor() && !self.is_data()
    }

    /// Shape checks performed before a descriptor touches any object.
    pub fn validate(&self, key: &PropertyKey) -> Result<(), RuntimeError> {
        if self.is_accessor() && self.is_data() {
            return Err(RuntimeError::InvalidDescriptor);
        }
        for (role, func) in [("getter", &self.get), ("setter", &self.set)] {
            if let Some(f) = func
                && !f.is_undefined()
                && !f.is_callable()
            {
                return Err(RuntimeError::NotCallable {
                    role,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    /// The complete descriptor of an installed property. A missing getter or
    /// setter stays missing rather than being reported as `undefined`, unless
    /// both are missing: then both read `undefined` so the descriptor is
    /// still an accessor.
    pub fn from_property(prop: &Property) -> Self {
        let base = match &prop.slot {
            PropertySlot::Data { value, writable } => {
                Self::data(value.clone()).with_writable(*writable)
            }
            PropertySlot::Accessor {
                get: None,
                set: None,
            } => Self::accessor(Some(JsValue::Undefined), Some(JsValue::Undefined)),
            PropertySlot::Accessor { get, set } => Self::accessor(get.clone(), set.clone()),
        };
        base.with_enumerable(prop.enumerable)
            .with_configurable(prop.configurable)
    }

    /// Render as a plain object holding only the fields that are present.
    pub fn to_object(&self) -> JsObject {
        let mut obj = JsObject::new();
        let fields = [
            ("value", self.value.clone()),
            ("writable", self.writable.map(JsValue::Boolean)),
            ("get", self.get.clone()),
            ("set", self.set.clone()),
            ("enumerable", self.enumerable.map(JsValue::Boolean)),
            ("configurable", self.configurable.map(JsValue::Boolean)),
        ];
        for (name, field) in fields {
            if let Some(value) = field {
                obj.insert(name, value);
            }
        }
        obj
    }
}
