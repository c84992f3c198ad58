//! Debounced viewport resize handling.
//!
//! Each resize event resets an 80 ms timer; once the viewport goes quiet the
//! coordinator syncs the canvas backing store, recomputes the camera aspect
//! and reconfigures the surface. Device class and simulation parameters are
//! never re-derived here.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use crate::EngineShared;

pub struct ResizeCoordinator {
    window: web::Window,
    on_resize: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    timer_id: Rc<Cell<Option<i32>>>,
}

pub fn wire_resize(shared: &Rc<EngineShared>) -> anyhow::Result<ResizeCoordinator> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let timer_id = Rc::new(Cell::new(None::<i32>));
    let pending: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let on_resize = {
        let shared = shared.clone();
        let window = window.clone();
        let timer_id = timer_id.clone();
        let pending = pending.clone();
        Closure::wrap(Box::new(move || {
            if shared.disposed.get() {
                return;
            }
            if let Some(id) = timer_id.take() {
                window.clear_timeout_with_handle(id);
            }
            let fire = {
                let shared = shared.clone();
                let timer_id = timer_id.clone();
                Closure::wrap(Box::new(move || {
                    timer_id.set(None);
                    apply_resize(&shared);
                }) as Box<dyn FnMut()>)
            };
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                RESIZE_DEBOUNCE_MS,
            ) {
                Ok(id) => timer_id.set(Some(id)),
                Err(e) => log::error!("set_timeout error: {:?}", e),
            }
            *pending.borrow_mut() = Some(fire);
        }) as Box<dyn FnMut()>)
    };

    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    Ok(ResizeCoordinator {
        window,
        on_resize,
        pending,
        timer_id,
    })
}

fn apply_resize(shared: &Rc<EngineShared>) {
    if shared.disposed.get() {
        return;
    }
    dom::sync_canvas_backing_size(&shared.canvas);
    let w = shared.canvas.width().max(1);
    let h = shared.canvas.height().max(1);
    let ctx = shared.ctx.borrow().clone();
    if let Some(ctx) = ctx {
        let mut ctx = ctx.borrow_mut();
        ctx.rig.set_aspect(w as f32 / h as f32);
        ctx.gpu.resize_if_needed(w, h);
    }
}

impl ResizeCoordinator {
    /// Remove the listener and cancel any pending debounce timer.
    pub fn unwire(&self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Some(id) = self.timer_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
        self.pending.borrow_mut().take();
    }
}
