#![cfg(target_arch = "wasm32")]
use globe_core::{default_albums, Album, DetailOverlay, GlobeLayout, GlobeState, ProjectionParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{ROOT_ID, STAGE_ID};

// Stylesheet bundled as a string constant
static STYLES_CSS: &str = include_str!("styles.css");

fn inject_styles(document: &web::Document) -> anyhow::Result<()> {
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let style = dom::create(document, "style", "")?;
    style.set_text_content(Some(STYLES_CSS));
    dom::append(&head, &style);
    Ok(())
}

// Cancel the frame loop when the page is torn down
fn wire_teardown(handle: frame::LoopHandle) {
    let closure = Closure::wrap(Box::new(move || {
        handle.cancel();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;

    inject_styles(&document)?;

    let albums: Rc<[Album]> = default_albums()?.into();
    let layout = GlobeLayout::build(albums.clone());
    log::info!("[init] albums={}", albums.len());

    let root = dom::create_with_id(&document, "div", ROOT_ID, "joy-root")?;
    render::build_starfield(&document, &root)?;
    let stage = dom::create_with_id(&document, "main", STAGE_ID, "globe-stage")?;
    dom::append(&root, &stage);
    render::build_header(&document, &root)?;
    overlay::build(&document, &root)?;
    dom::append(&body, &root);

    // ---------------- Shared state ----------------
    let globe = Rc::new(RefCell::new(GlobeState::default()));
    let overlay_state = Rc::new(RefCell::new(DetailOverlay::default()));

    let globe_press = globe.clone();
    let on_press: render::PressHandler = Rc::new(move |i| {
        globe_press.borrow_mut().press_thumbnail(i);
    });
    let scene = render::build_scene(&document, &stage, &layout, on_press)?;

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        stage: stage.clone(),
        albums: albums.clone(),
        globe: globe.clone(),
        overlay: overlay_state.clone(),
    });
    events::wire_overlay_controls(&document, overlay_state.clone());

    // Rotation + render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        albums,
        layout,
        params: ProjectionParams::default(),
        scene,
        globe,
        overlay: overlay_state,
    }));
    let handle = frame::start_loop(frame_ctx);
    wire_teardown(handle);

    Ok(())
}
