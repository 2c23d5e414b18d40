mod property;
pub mod property_descriptor;
pub mod prototype;

pub use property::{Property, PropertySlot};
pub use property_descriptor::PropertyDescriptor;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::symbol::JsSymbol;
use super::{JsValue, same_value};
use crate::errors::RuntimeError;

pub type ObjectRef = Rc<RefCell<JsObject>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(JsSymbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{s}"),
            PropertyKey::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        PropertyKey::String(value.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<JsSymbol> for PropertyKey {
    fn from(value: JsSymbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<&JsSymbol> for PropertyKey {
    fn from(value: &JsSymbol) -> Self {
        PropertyKey::Symbol(value.clone())
    }
}

/// An ordinary object: own properties in insertion order, an extensible
/// flag and an optional prototype.
#[derive(Debug, Clone)]
pub struct JsObject {
    properties: HashMap<PropertyKey, Property>,
    order: Vec<PropertyKey>,
    pub prototype: Option<ObjectRef>,
    extensible: bool,
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

impl JsObject {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            order: Vec::new(),
            prototype: None,
            extensible: true,
        }
    }

    pub fn with_prototype(prototype: ObjectRef) -> Self {
        Self {
            prototype: Some(prototype),
            ..Self::new()
        }
    }

    pub fn wrapped(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    pub fn get_own(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    /// Own properties in property order, see [`JsObject::own_keys`].
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Property)> {
        self.ordered_keys()
            .into_iter()
            .filter_map(|key| self.properties.get_key_value(key))
    }

    /// Array-index keys in ascending numeric order, then the remaining
    /// string keys, then symbols, the last two in insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.ordered_keys().into_iter().cloned().collect()
    }

    fn ordered_keys(&self) -> Vec<&PropertyKey> {
        let mut indices: Vec<(u32, &PropertyKey)> = Vec::new();
        let mut strings = Vec::new();
        let mut symbols = Vec::new();
        for key in &self.order {
            match key {
                PropertyKey::String(s) => match array_index(s) {
                    Some(index) => indices.push((index, key)),
                    None => strings.push(key),
                },
                PropertyKey::Symbol(_) => symbols.push(key),
            }
        }
        indices.sort_by_key(|(index, _)| *index);
        indices
            .into_iter()
            .map(|(_, key)| key)
            .chain(strings)
            .chain(symbols)
            .collect()
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }

    /// Object-literal style insertion: the key becomes a writable,
    /// enumerable, configurable data property holding `value`, replacing
    /// whatever was there.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: JsValue) {
        let key = key.into();
        if self.properties.insert(key.clone(), Property::new(value)).is_none() {
            self.order.push(key);
        }
    }

    /// `[[DefineOwnProperty]]`: validate `desc` against the current state of
    /// `key` and apply it atomically. On error the object is unchanged.
    pub fn define_own_property(
        &mut self,
        key: PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), RuntimeError> {
        desc.validate(&key)?;

        let Some(current) = self.properties.get_mut(&key) else {
            if !self.extensible {
                tracing::debug!(%key, "rejected new property on non-extensible object");
                return Err(RuntimeError::NotExtensible { key });
            }
            self.properties
                .insert(key.clone(), Property::from_descriptor(desc));
            self.order.push(key);
            return Ok(());
        };

        if !current.configurable && !compatible_with_frozen(current, &desc) {
            tracing::debug!(%key, "rejected redefinition of non-configurable property");
            return Err(RuntimeError::Redefine { key });
        }

        current.apply(desc);
        Ok(())
    }

    /// Remove a configurable own property. Returns `false` if the property
    /// exists but is non-configurable.
    pub fn delete(&mut self, key: &PropertyKey) -> bool {
        match self.properties.get(key) {
            None => true,
            Some(prop) if !prop.configurable => false,
            Some(_) => {
                self.properties.remove(key);
                self.order.retain(|k| k != key);
                true
            }
        }
    }
}

/// A canonical array index: `0` or digits without a leading zero, below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// Whether `desc` may be applied to a non-configurable property without
/// changing anything the object model forbids changing.
fn compatible_with_frozen(current: &Property, desc: &PropertyDescriptor) -> bool {
    if desc.configurable == Some(true) {
        return false;
    }
    if desc.enumerable.is_some_and(|e| e != current.enumerable) {
        return false;
    }
    if desc.is_generic() {
        return true;
    }
    if desc.is_accessor() != current.is_accessor() {
        return false;
    }

    match &current.slot {
        PropertySlot::Accessor { get, set } => {
            let unchanged = |proposed: &Option<JsValue>, existing: &Option<JsValue>| {
                proposed.as_ref().is_none_or(|p| {
                    same_value(p, existing.as_ref().unwrap_or(&JsValue::Undefined))
                })
            };
            unchanged(&desc.get, get) && unchanged(&desc.set, set)
        }
        PropertySlot::Data { writable: true, .. } => true,
        PropertySlot::Data {
            value,
            writable: false,
        } => {
            desc.writable != Some(true)
                && desc.value.as_ref().is_none_or(|v| same_value(v, value))
        }
    }
}
