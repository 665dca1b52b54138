use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_el(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn create_img(
    document: &web::Document,
    class: &str,
    src: &str,
) -> anyhow::Result<web::HtmlImageElement> {
    let img: web::HtmlImageElement = create_el(document, "img", class)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    Ok(img)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn write_input_value(input: &web::HtmlInputElement, value: f64) {
    input.set_value(&value.to_string());
}

/// Range inputs report plain decimal strings; anything unparsable (which
/// normal interaction cannot produce) is ignored by the caller.
#[inline]
pub fn read_input_value(input: &web::HtmlInputElement) -> Option<f64> {
    input.value().parse::<f64>().ok().filter(|v| v.is_finite())
}
