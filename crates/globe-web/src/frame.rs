use crate::render;
use globe_core::{Album, DetailOverlay, GlobeLayout, GlobeState, ProjectionParams};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub albums: Rc<[Album]>,
    pub layout: GlobeLayout,
    pub params: ProjectionParams,
    pub scene: render::SceneElements,
    pub globe: Rc<RefCell<GlobeState>>,
    pub overlay: Rc<RefCell<DetailOverlay>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();

        if self.overlay.borrow_mut().poll_closed(now) {
            render::set_tap_hint_visible(&self.document, true);
        }

        // Same collection every frame in practice; only a new one re-lays out.
        if self.layout.refresh(&self.albums) {
            log::warn!("[frame] album collection changed; layout rebuilt");
        }

        // An album stays selected until its exit transition has finished.
        let paused = self.overlay.borrow().album_index().is_some();
        let rotation = {
            let mut globe = self.globe.borrow_mut();
            globe.tick(paused);
            globe.rotation
        };
        self.scene.update(&self.layout, rotation, &self.params);
    }
}

/// Handle to the running animation loop.
#[derive(Clone)]
pub struct LoopHandle {
    request_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Cancel the pending frame and stop re-scheduling.
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("[frame] loop cancelled");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        request_id: Rc::new(Cell::new(None)),
        stopped: Rc::new(Cell::new(false)),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.request_id.set(None);
        if handle_tick.stopped.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &handle_tick);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &handle);
    handle
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &LoopHandle) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.request_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}
