use super::JsValue;

/// SameValue: like `===` except NaN equals itself and +0 differs from -0.
pub fn same_value(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Number(x), JsValue::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                return true;
            }
            x == y && x.is_sign_negative() == y.is_sign_negative()
        }
        _ => a == b,
    }
}

impl JsValue {
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Symbol(_) => true,
            JsValue::NativeFunction { .. } => true,
            JsValue::Object(_) => true,
            JsValue::Array(_) => true,
        }
    }

    /// Convert to a string for concatenation (JS coercion rules).
    pub fn to_js_string(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            JsValue::String(s) => s.clone(),
            JsValue::Symbol(sym) => sym.to_string(),
            JsValue::NativeFunction { name, .. } => {
                format!("function {name}() {{ [native code] }}")
            }
            JsValue::Object(_) => "[object Object]".to_string(),
            JsValue::Array(arr) => {
                let arr = arr.borrow();
                let items: Vec<String> = arr.elements.iter().map(|v| v.to_js_string()).collect();
                items.join(",")
            }
        }
    }
}
