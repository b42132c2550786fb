use crate::overlay;
use crate::render;
use globe_core::{Album, DetailOverlay, GlobeState, PointerSample};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub stage: web::HtmlElement,
    pub albums: Rc<[Album]>,
    pub globe: Rc<RefCell<GlobeState>>,
    pub overlay: Rc<RefCell<DetailOverlay>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

#[inline]
fn sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample::new(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32)
}

fn listen(w: &InputWiring, kind: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = w
        .stage
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerdown", move |ev| {
        w2.globe.borrow_mut().pointer_down(sample(&ev));
        _ = w2.stage.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointermove", move |ev| {
        let mut globe = w2.globe.borrow_mut();
        if globe.interaction.is_dragging() {
            globe.pointer_move(sample(&ev));
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerup", move |ev| {
        _ = w2.stage.release_pointer_capture(ev.pointer_id());
        let selected = w2.globe.borrow_mut().pointer_up(sample(&ev));
        if let Some(i) = selected {
            select_album(&w2, i);
        }
    });
}

fn wire_pointercancel(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointercancel", move |ev| {
        _ = w2.stage.release_pointer_capture(ev.pointer_id());
        w2.globe.borrow_mut().pointer_cancel();
    });
}

/// Hand a tapped album to the overlay; this also pauses autoplay.
fn select_album(w: &InputWiring, index: usize) {
    let Some(album) = w.albums.get(index) else {
        log::warn!("[input] tap on unknown album index {}", index);
        return;
    };
    let mut ov = w.overlay.borrow_mut();
    ov.open(index, album);
    overlay::show(&w.document, album, ov.carousel());
    render::set_tap_hint_visible(&w.document, false);
}
