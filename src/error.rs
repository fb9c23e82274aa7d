use js_sys::Object;
use trackgraph::GraphError;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

fn data(pairs: &[(&str, JsValue)]) -> JsValue {
    let d: Object = new_obj();
    for (k, v) in pairs { set_kv(&d, k, v); }
    d.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("parameter '{}' must be finite", param), Some(data(&[("param", JsValue::from_str(param))])))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    err(
        "invalid_id",
        format!("invalid {} id", kind),
        Some(data(&[("kind", JsValue::from_str(kind)), ("id", JsValue::from_f64(id as f64))])),
    )
}

#[inline]
pub fn invalid_input(what: &str, message: impl Into<String>) -> JsValue {
    err("invalid_input", message, Some(data(&[("param", JsValue::from_str(what))])))
}

/// Typed error object for a core failure, carrying its structured fields.
pub fn from_graph(e: &GraphError) -> JsValue {
    let payload = match e {
        GraphError::InvalidId { kind, id } => {
            data(&[("kind", JsValue::from_str(kind)), ("id", JsValue::from_f64(*id as f64))])
        }
        GraphError::InvalidEdge { u, v, .. } => {
            data(&[("u", JsValue::from_f64(*u as f64)), ("v", JsValue::from_f64(*v as f64))])
        }
        GraphError::NonFinite { param } => data(&[("param", JsValue::from_str(param))]),
        GraphError::OutOfRange { param, min, max, got } => data(&[
            ("param", JsValue::from_str(param)),
            ("min", JsValue::from_f64(*min)),
            ("max", JsValue::from_f64(*max)),
            ("got", JsValue::from_f64(*got)),
        ]),
        GraphError::LimitExceeded { what, limit } => {
            data(&[("what", JsValue::from_str(what)), ("limit", JsValue::from_f64(*limit as f64))])
        }
        GraphError::JsonParse(_) => return err(e.code(), e.to_string(), None),
    };
    err(e.code(), e.to_string(), Some(payload))
}
