use crate::runtime::value::JsValue;

use super::property_descriptor::PropertyDescriptor;

/// The kind-specific half of a stored property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySlot {
    Data { value: JsValue, writable: bool },
    /// Either function may be missing; a missing getter reads as `undefined`
    /// and a missing setter rejects writes.
    Accessor {
        get: Option<JsValue>,
        set: Option<JsValue>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub slot: PropertySlot,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Property {
    /// A plain assignment-created property: writable, enumerable, configurable.
    pub fn new(value: JsValue) -> Self {
        Self {
            slot: PropertySlot::Data {
                value,
                writable: true,
            },
            enumerable: true,
            configurable: true,
        }
    }

    /// Install a property on an absent key. Fields missing from `desc` take
    /// their defaults: `undefined` for values and functions, `false` for flags.
    pub(crate) fn from_descriptor(desc: PropertyDescriptor) -> Self {
        let slot = if desc.is_accessor() {
            PropertySlot::Accessor {
                get: desc.get.filter(|g| !g.is_undefined()),
                set: desc.set.filter(|s| !s.is_undefined()),
            }
        } else {
            PropertySlot::Data {
                value: desc.value.unwrap_or(JsValue::Undefined),
                writable: desc.writable.unwrap_or(false),
            }
        };
        Self {
            slot,
            enumerable: desc.enumerable.unwrap_or(false),
            configurable: desc.configurable.unwrap_or(false),
        }
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, PropertySlot::Accessor { .. })
    }

    /// Always `false` for accessors.
    pub fn writable(&self) -> bool {
        matches!(self.slot, PropertySlot::Data { writable: true, .. })
    }

    pub fn value(&self) -> Option<&JsValue> {
        match &self.slot {
            PropertySlot::Data { value, .. } => Some(value),
            PropertySlot::Accessor { .. } => None,
        }
    }

    /// Merge an already-validated descriptor into this property. Fields the
    /// descriptor leaves out keep their current state.
    pub(crate) fn apply(&mut self, desc: PropertyDescriptor) {
        if desc.is_accessor() && !self.is_accessor() {
            self.slot = PropertySlot::Accessor {
                get: None,
                set: None,
            };
        } else if desc.is_data() && self.is_accessor() {
            self.slot = PropertySlot::Data {
                value: JsValue::Undefined,
                writable: false,
            };
        }

        match &mut self.slot {
            PropertySlot::Data { value, writable } => {
                if let Some(v) = desc.value {
                    *value = v;
                }
                if let Some(w) = desc.writable {
                    *writable = w;
                }
            }
            PropertySlot::Accessor { get, set } => {
                if let Some(g) = desc.get {
                    *get = Some(g).filter(|g| !g.is_undefined());
                }
                if let Some(s) = desc.set {
                    *set = Some(s).filter(|s| !s.is_undefined());
                }
            }
        }

        if let Some(e) = desc.enumerable {
            self.enumerable = e;
        }
        if let Some(c) = desc.configurable {
            self.configurable = c;
        }
    }
}
