//! DOM construction for the widget: per axis (in presentation order) a
//! container holding the left icon, the range control, the right icon and
//! the shared intensity-cue image.

use crate::dom;
use slider_core::{assets, Axis, SliderConfig, SliderEngine, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WidgetDom {
    pub root: web::HtmlElement,
    pub pleasure_input: web::HtmlInputElement,
    pub arousal_input: web::HtmlInputElement,
}

impl WidgetDom {
    pub fn input(&self, axis: Axis) -> &web::HtmlInputElement {
        match axis {
            Axis::Pleasure => &self.pleasure_input,
            Axis::Arousal => &self.arousal_input,
        }
    }
}

pub fn build(
    document: &web::Document,
    config: &SliderConfig,
    engine: &SliderEngine,
) -> anyhow::Result<WidgetDom> {
    let root: web::HtmlElement = dom::create_el(document, "div", "affective-slider")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut pleasure_input = None;
    let mut arousal_input = None;
    for axis in engine.order().axes() {
        let (container, input) = build_axis(document, config, axis, engine.value(axis))?;
        dom::append(&root, &container)?;
        match axis {
            Axis::Pleasure => pleasure_input = Some(input),
            Axis::Arousal => arousal_input = Some(input),
        }
    }

    // The order always contains both axes, so both inputs exist.
    let pleasure_input =
        pleasure_input.ok_or_else(|| anyhow::anyhow!("pleasure control not built"))?;
    let arousal_input =
        arousal_input.ok_or_else(|| anyhow::anyhow!("arousal control not built"))?;
    Ok(WidgetDom {
        root,
        pleasure_input,
        arousal_input,
    })
}

fn build_axis(
    document: &web::Document,
    config: &SliderConfig,
    axis: Axis,
    value: f64,
) -> anyhow::Result<(web::Element, web::HtmlInputElement)> {
    let container = dom::create_el(document, "div", "as-container")?;
    let images = assets::AxisImages::for_axis(&config.image_path, axis);
    let (left_label, right_label) = config.labels(axis);

    dom::append(
        &container,
        &icon_wrapper(document, "as-icon-left", &images.left, left_label)?,
    )?;
    let input = range_input(document, axis, value)?;
    dom::append(&container, &input)?;
    dom::append(
        &container,
        &icon_wrapper(document, "as-icon-right", &images.right, right_label)?,
    )?;
    dom::append(&container, &intensity_cue(document, &config.image_path)?)?;
    Ok((container, input))
}

fn range_input(
    document: &web::Document,
    axis: Axis,
    value: f64,
) -> anyhow::Result<web::HtmlInputElement> {
    let input: web::HtmlInputElement = dom::create_el(document, "input", "as-slider")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_type("range");
    let id = format!("AS-{}", axis.name());
    input.set_id(&id);
    input.set_name(&id);
    input.set_min(&SLIDER_MIN.to_string());
    input.set_max(&SLIDER_MAX.to_string());
    input.set_step(&SLIDER_STEP.to_string());
    dom::write_input_value(&input, value);
    Ok(input)
}

fn icon_wrapper(
    document: &web::Document,
    side_class: &str,
    src: &str,
    label: Option<&str>,
) -> anyhow::Result<web::Element> {
    let wrapper = dom::create_el(document, "div", &format!("as-icon-wrapper {side_class}"))?;
    dom::append(&wrapper, &dom::create_img(document, "as-icon", src)?)?;
    if let Some(text) = label {
        let caption = dom::create_el(document, "span", "as-icon-label")?;
        caption.set_text_content(Some(text));
        dom::append(&wrapper, &caption)?;
    }
    Ok(wrapper)
}

fn intensity_cue(document: &web::Document, image_path: &str) -> anyhow::Result<web::Element> {
    let cue = dom::create_el(document, "div", "as-intensity-cue")?;
    let src = assets::intensity_cue(image_path);
    dom::append(&cue, &dom::create_img(document, "", &src)?)?;
    Ok(cue)
}
