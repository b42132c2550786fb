use crate::constants::*;
use crate::dom;
use crate::overlay;
use globe_core::DetailOverlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn request_close(document: &web::Document, state: &Rc<RefCell<DetailOverlay>>) {
    if state.borrow_mut().request_close(Instant::now()) {
        overlay::hide(document);
    }
}

/// Backdrop and close button start the exit; clicks on the card itself stay
/// inside it. The frame loop finishes the close once the transition is over.
pub fn wire_overlay_controls(document: &web::Document, state: Rc<RefCell<DetailOverlay>>) {
    let doc = document.clone();
    let st = state.clone();
    dom::add_click_listener(document, OVERLAY_ID, move |_ev| {
        request_close(&doc, &st);
    });

    dom::add_click_listener(document, OVERLAY_CARD_ID, move |ev| {
        ev.stop_propagation();
    });

    let doc = document.clone();
    let st = state.clone();
    dom::add_click_listener(document, OVERLAY_CLOSE_ID, move |ev| {
        ev.stop_propagation();
        request_close(&doc, &st);
    });

    let doc = document.clone();
    let st = state.clone();
    dom::add_click_listener(document, OVERLAY_PREV_ID, move |ev| {
        ev.stop_propagation();
        let mut ov = st.borrow_mut();
        ov.carousel_mut().prev();
        overlay::update_image(&doc, ov.carousel());
    });

    let doc = document.clone();
    dom::add_click_listener(document, OVERLAY_NEXT_ID, move |ev| {
        ev.stop_propagation();
        let mut ov = state.borrow_mut();
        ov.carousel_mut().next();
        overlay::update_image(&doc, ov.carousel());
    });
}
