#![cfg(target_arch = "wasm32")]
use slider_core::{Axis, PresentationOrder, SliderConfig, SliderEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod emit;
mod events;
mod styles;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slider-web loaded");
    Ok(())
}

/// Mount-time options, constructible from JS. Field names mirror the
/// configuration surface: controlled values, image path prefix, optional
/// captions, and the order-randomization flag.
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Default)]
pub struct SliderOptions {
    pub pleasure_value: Option<f64>,
    pub arousal_value: Option<f64>,
    pub image_path: Option<String>,
    pub pleasure_left_label: Option<String>,
    pub pleasure_right_label: Option<String>,
    pub arousal_left_label: Option<String>,
    pub arousal_right_label: Option<String>,
    pub randomize_order: bool,
}

#[wasm_bindgen]
impl SliderOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SliderOptions {
        SliderOptions::default()
    }
}

impl SliderOptions {
    fn to_config(&self) -> SliderConfig {
        SliderConfig {
            pleasure_value: self.pleasure_value,
            arousal_value: self.arousal_value,
            image_path: self.image_path.clone().unwrap_or_default(),
            pleasure_left_label: self.pleasure_left_label.clone(),
            pleasure_right_label: self.pleasure_right_label.clone(),
            arousal_left_label: self.arousal_left_label.clone(),
            arousal_right_label: self.arousal_right_label.clone(),
            randomize_order: self.randomize_order,
        }
    }
}

/// A mounted widget instance. Handlers keep the engine alive through an
/// `Rc`, so dropping this handle on the JS side does not tear the widget
/// down; call `unmount` for that.
#[wasm_bindgen]
pub struct AffectiveSlider {
    engine: Rc<RefCell<SliderEngine>>,
    widget: view::WidgetDom,
}

#[wasm_bindgen]
impl AffectiveSlider {
    /// Build the widget inside `container` and wire its event handlers.
    /// Emitted events surface as bubbling `CustomEvent`s on the widget root.
    pub fn mount(
        container: &web::Element,
        options: &SliderOptions,
    ) -> Result<AffectiveSlider, JsValue> {
        let document =
            dom::window_document().ok_or_else(|| JsValue::from_str("no document available"))?;
        let config = options.to_config();
        // One uniform draw at mount decides the left-to-right order.
        let order = PresentationOrder::from_draw(config.randomize_order, js_sys::Math::random());
        let engine = SliderEngine::new(&config, order)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        styles::ensure_styles(&document).map_err(to_js)?;
        let widget = view::build(&document, &config, &engine).map_err(to_js)?;
        container.append_child(&widget.root)?;

        let engine = Rc::new(RefCell::new(engine));
        events::wire_axis_handlers(&engine, &widget);
        log::info!(
            "[slider] mounted: order={:?} pleasure={:.2} arousal={:.2}",
            order.axes(),
            engine.borrow().value(Axis::Pleasure),
            engine.borrow().value(Axis::Arousal)
        );
        Ok(AffectiveSlider { engine, widget })
    }

    /// One-way controlled-value sync: updates internal state and the DOM
    /// control without emitting any events.
    pub fn set_pleasure_value(&self, value: f64) {
        self.sync(Axis::Pleasure, value);
    }

    /// One-way controlled-value sync for the arousal axis.
    pub fn set_arousal_value(&self, value: f64) {
        self.sync(Axis::Arousal, value);
    }

    #[wasm_bindgen(getter)]
    pub fn pleasure_value(&self) -> f64 {
        self.engine.borrow().value(Axis::Pleasure)
    }

    #[wasm_bindgen(getter)]
    pub fn arousal_value(&self) -> f64 {
        self.engine.borrow().value(Axis::Arousal)
    }

    /// Root element of the widget; the target to listen on for
    /// `update:pleasureValue`, `update:arousalValue`, `change` and
    /// `interacted`.
    pub fn root(&self) -> web::HtmlElement {
        self.widget.root.clone()
    }

    /// Remove the widget subtree from the document. Interaction latches die
    /// with the instance; a re-mount starts fresh.
    pub fn unmount(&self) {
        self.widget.root.remove();
    }
}

impl AffectiveSlider {
    fn sync(&self, axis: Axis, value: f64) {
        let mut engine = self.engine.borrow_mut();
        engine.sync_value(axis, value);
        dom::write_input_value(self.widget.input(axis), engine.value(axis));
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:?}"))
}
