use std::cell::RefCell;
use std::rc::Rc;

use super::JsValue;

#[derive(Debug, Clone, Default)]
pub struct JsArray {
    pub elements: Vec<JsValue>,
}

impl JsArray {
    pub fn new(elements: Vec<JsValue>) -> Self {
        Self { elements }
    }

    pub fn get(&self, index: usize) -> JsValue {
        self.elements
            .get(index)
            .cloned()
            .unwrap_or(JsValue::Undefined)
    }

    pub fn includes(&self, value: &JsValue) -> bool {
        self.elements.iter().any(|v| v == value)
    }

    pub fn wrapped(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}
