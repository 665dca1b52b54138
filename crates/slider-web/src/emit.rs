//! CustomEvent dispatch on the widget root. Event names and payload shapes
//! are the component's public contract.

use slider_core::{Axis, SliderEvent, ValuePair};
use wasm_bindgen::JsValue;
use web_sys as web;

pub const UPDATE_PLEASURE_EVENT: &str = "update:pleasureValue";
pub const UPDATE_AROUSAL_EVENT: &str = "update:arousalValue";
pub const CHANGE_EVENT: &str = "change";
pub const INTERACTED_EVENT: &str = "interacted";

pub fn dispatch_all(root: &web::HtmlElement, events: &[SliderEvent]) {
    for event in events {
        if let Err(e) = dispatch(root, event) {
            log::error!("[slider] event dispatch failed: {:?}", e);
        }
    }
}

fn dispatch(root: &web::HtmlElement, event: &SliderEvent) -> Result<(), JsValue> {
    let (name, detail) = match event {
        SliderEvent::ValueUpdate { axis, value } => {
            (update_event_name(*axis), JsValue::from_f64(*value))
        }
        SliderEvent::Change(values) => (CHANGE_EVENT, pair_detail(values, None)?),
        SliderEvent::Interacted { axis, values } => {
            (INTERACTED_EVENT, pair_detail(values, Some(*axis))?)
        }
    };
    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    let custom = web::CustomEvent::new_with_event_init_dict(name, &init)?;
    root.dispatch_event(&custom)?;
    Ok(())
}

fn update_event_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Pleasure => UPDATE_PLEASURE_EVENT,
        Axis::Arousal => UPDATE_AROUSAL_EVENT,
    }
}

fn pair_detail(values: &ValuePair, axis: Option<Axis>) -> Result<JsValue, JsValue> {
    let detail = js_sys::Object::new();
    if let Some(axis) = axis {
        js_sys::Reflect::set(&detail, &"type".into(), &axis.name().into())?;
    }
    js_sys::Reflect::set(&detail, &"pleasure".into(), &values.pleasure.into())?;
    js_sys::Reflect::set(&detail, &"arousal".into(), &values.arousal.into())?;
    Ok(detail.into())
}
