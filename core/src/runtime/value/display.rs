use super::JsValue;
use std::fmt;

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::String(s) => write!(f, "{s}"),
            JsValue::Object(obj) => {
                let obj = obj.borrow();
                let pairs: Vec<String> = obj
                    .iter()
                    .filter(|(_, p)| p.enumerable)
                    .map(|(k, p)| match p.value() {
                        Some(value) => format!("{k}: {value}"),
                        None => format!("{k}: [Getter/Setter]"),
                    })
                    .collect();
                write!(f, "{{ {} }}", pairs.join(", "))
            }
            JsValue::Array(arr) => {
                let arr = arr.borrow();
                let items: Vec<String> = arr.elements.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            other => write!(f, "{}", other.to_js_string()),
        }
    }
}
