//! Pointer-drag orbit and wheel zoom wiring.
//!
//! Unlike one-shot `Closure::forget` wiring, every closure is retained so the
//! listeners can be removed again at dispose.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::PointerState;
use crate::EngineShared;
use backdrop_core::ORBIT_DRAG_SENSITIVITY;

pub struct PointerWiring {
    canvas: web::HtmlCanvasElement,
    down: Closure<dyn FnMut(web::PointerEvent)>,
    moved: Closure<dyn FnMut(web::PointerEvent)>,
    up: Closure<dyn FnMut(web::PointerEvent)>,
    wheel: Closure<dyn FnMut(web::WheelEvent)>,
}

pub fn wire_pointer_handlers(shared: &Rc<EngineShared>) -> PointerWiring {
    let state = Rc::new(RefCell::new(PointerState::default()));
    let canvas = shared.canvas.clone();

    let down = {
        let state = state.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut st = state.borrow_mut();
            st.down = true;
            st.x = ev.client_x() as f32;
            st.y = ev.client_y() as f32;
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };

    let moved = {
        let state = state.clone();
        let shared = shared.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (dx, dy);
            {
                let mut st = state.borrow_mut();
                if !st.down {
                    return;
                }
                dx = ev.client_x() as f32 - st.x;
                dy = ev.client_y() as f32 - st.y;
                st.x = ev.client_x() as f32;
                st.y = ev.client_y() as f32;
            }
            let ctx = shared.ctx.borrow().clone();
            if let Some(ctx) = ctx {
                ctx.borrow_mut()
                    .rig
                    .rotate(-dx * ORBIT_DRAG_SENSITIVITY, -dy * ORBIT_DRAG_SENSITIVITY);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let up = {
        let state = state.clone();
        Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            state.borrow_mut().down = false;
        }) as Box<dyn FnMut(_)>)
    };

    let wheel = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let ctx = shared.ctx.borrow().clone();
            if let Some(ctx) = ctx {
                ctx.borrow_mut().rig.zoom(ev.delta_y() as f32);
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };

    for (event, cb) in [
        ("pointerdown", down.as_ref()),
        ("pointermove", moved.as_ref()),
        ("pointerup", up.as_ref()),
        ("pointercancel", up.as_ref()),
        ("wheel", wheel.as_ref()),
    ] {
        if let Err(e) = canvas.add_event_listener_with_callback(event, cb.unchecked_ref()) {
            log::error!("failed to attach {} listener: {:?}", event, e);
        }
    }

    PointerWiring {
        canvas,
        down,
        moved,
        up,
        wheel,
    }
}

impl PointerWiring {
    pub fn unwire(&self) {
        for (event, cb) in [
            ("pointerdown", self.down.as_ref()),
            ("pointermove", self.moved.as_ref()),
            ("pointerup", self.up.as_ref()),
            ("pointercancel", self.up.as_ref()),
            ("wheel", self.wheel.as_ref()),
        ] {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(event, cb.unchecked_ref());
        }
    }
}
