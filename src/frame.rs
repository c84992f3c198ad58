//! Per-frame driver: fixed-step gating, simulation, scene update and render,
//! all inside a self-rescheduling requestAnimationFrame loop that the engine
//! handle can cancel.

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use backdrop_core::{
    scroll_scale, scroll_scale_limit, CameraRig, FrameScheduler, ParticleField, SceneGraph,
    SPHERE_SPIN_STEP,
};
use glam::Vec3;
use instant::Instant;

use crate::dom;
use crate::render;
use crate::EngineShared;

pub struct FrameContext {
    pub scene: SceneGraph,
    pub particles: ParticleField,
    pub scheduler: FrameScheduler,
    pub rig: CameraRig,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub shared: Rc<EngineShared>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Fixed-step gate: skip both simulation and render until one
        // interval has elapsed; never run more than one step per callback.
        if !self.scheduler.advance(dt) {
            return;
        }

        self.particles.step();
        self.scene.rotate_step(Vec3::from(SPHERE_SPIN_STEP));
        self.rig.update(dt.as_secs_f32());

        // Scroll scale: the limit tracks the live viewport width, the
        // progress cell is written externally and read once per frame.
        let limit = scroll_scale_limit(dom::viewport_width());
        let scale = scroll_scale(self.shared.scroll_progress.get(), limit);
        self.scene.scale(scale);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self
            .gpu
            .render(&self.scene, &self.rig.camera, self.particles.positions())
        {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(shared: Rc<EngineShared>) {
    let closure = Closure::wrap(Box::new({
        let shared = shared.clone();
        move || {
            if shared.disposed.get() {
                return;
            }
            let ctx = shared.ctx.borrow().clone();
            if let Some(ctx) = ctx {
                ctx.borrow_mut().frame();
            }
            schedule_next(&shared);
        }
    }) as Box<dyn FnMut()>);
    *shared.frame_closure.borrow_mut() = Some(closure);
    schedule_next(&shared);
}

fn schedule_next(shared: &EngineShared) {
    if shared.disposed.get() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = shared.frame_closure.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => shared.raf_id.set(Some(id)),
            Err(e) => log::error!("request_animation_frame error: {:?}", e),
        }
    }
}
