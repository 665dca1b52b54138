use crate::dom;
use crate::emit;
use crate::view::WidgetDom;
use slider_core::{Axis, SliderEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire `input` plus first-press handlers for both axes. Handlers drain the
/// engine's event buffer and re-dispatch synchronously, so the per-axis
/// update and the combined change always land in the same tick.
pub fn wire_axis_handlers(engine: &Rc<RefCell<SliderEngine>>, widget: &WidgetDom) {
    for axis in Axis::BOTH {
        wire_value_input(engine, widget, axis);
        wire_first_press(engine, widget, axis);
    }
}

fn wire_value_input(engine: &Rc<RefCell<SliderEngine>>, widget: &WidgetDom, axis: Axis) {
    let engine = engine.clone();
    let root = widget.root.clone();
    let input = widget.input(axis).clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(value) = dom::read_input_value(&input) else {
            return;
        };
        let mut out_events = Vec::new();
        engine.borrow_mut().set_value(axis, value, &mut out_events);
        emit::dispatch_all(&root, &out_events);
    }) as Box<dyn FnMut(_)>);
    let _ = widget
        .input(axis)
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_first_press(engine: &Rc<RefCell<SliderEngine>>, widget: &WidgetDom, axis: Axis) {
    // mousedown and touchstart share one latch in the engine, so a touch
    // followed by a synthesized mouse event still reports once.
    for event_name in ["mousedown", "touchstart"] {
        let engine = engine.clone();
        let root = widget.root.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
            let mut out_events = Vec::new();
            engine.borrow_mut().press(axis, &mut out_events);
            emit::dispatch_all(&root, &out_events);
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .input(axis)
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
