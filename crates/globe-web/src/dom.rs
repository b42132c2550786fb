use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element with the given class list.
pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn create_with_id(
    document: &web::Document,
    tag: &str,
    id: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, tag, class)?;
    el.set_id(id);
    Ok(el)
}

pub fn create_image(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlImageElement> {
    create(document, "img", class)?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow!("<img> is not an HtmlImageElement: {:?}", e))
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) {
    if let Err(e) = parent.append_child(child) {
        log::error!("append_child error: {:?}", e);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool, display: &str) {
    _ = el
        .style()
        .set_property("display", if visible { display } else { "none" });
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("missing #{} for click listener", element_id);
    }
}

/// Swap an image to `fallback` the first time it fails to load.
pub fn use_fallback_on_error(img: &web::HtmlImageElement, fallback: &'static str) {
    let target = img.clone();
    let closure = Closure::wrap(Box::new(move || {
        if target.src() != fallback {
            log::debug!("image failed, using fallback: {}", target.src());
            target.set_src(fallback);
        }
    }) as Box<dyn FnMut()>);
    _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
}
