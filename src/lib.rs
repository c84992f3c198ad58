//! WASM entry point for the starfall backdrop.
//!
//! The embedding page hands over a container element, raw decoded image
//! buffers and an initial scroll progress; the engine owns the canvas, the
//! listeners, the WebGPU device and the frame loop from there on, and
//! releases all of them again on [`Backdrop::dispose`].

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use backdrop_core::{scroll, CameraRig, FrameScheduler, ParticleField, PixelData, SceneConfig, SceneGraph};

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::{PARTICLE_FIELD_SEED, STAR_LAYER_SEED};

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Raw RGBA8 images pushed from the page. Decoding stays on the JS side;
/// anything malformed is dropped with a warning and rendered as a flat
/// placeholder instead.
#[wasm_bindgen]
#[derive(Default)]
pub struct BackdropAssets {
    sphere: Option<PixelData>,
    logo: Option<PixelData>,
    sprites: Vec<PixelData>,
}

#[wasm_bindgen]
impl BackdropAssets {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BackdropAssets {
        BackdropAssets::default()
    }

    pub fn set_sphere_image(&mut self, width: u32, height: u32, rgba: Vec<u8>) {
        self.sphere = checked_pixels("sphere", width, height, rgba);
    }

    pub fn set_logo_image(&mut self, width: u32, height: u32, rgba: Vec<u8>) {
        self.logo = checked_pixels("logo", width, height, rgba);
    }

    pub fn add_particle_image(&mut self, width: u32, height: u32, rgba: Vec<u8>) {
        if let Some(px) = checked_pixels("particle", width, height, rgba) {
            self.sprites.push(px);
        }
    }
}

fn checked_pixels(label: &str, width: u32, height: u32, rgba: Vec<u8>) -> Option<PixelData> {
    match PixelData::new(width, height, rgba) {
        Ok(px) => Some(px),
        Err(e) => {
            log::warn!("{} image rejected, using placeholder: {}", label, e);
            None
        }
    }
}

impl BackdropAssets {
    fn resolve(&self) -> render::ResolvedAssets {
        let mut resolved = render::ResolvedAssets::default();
        if let Some(px) = &self.sphere {
            resolved.sphere = px.clone();
        }
        if let Some(px) = &self.logo {
            resolved.logo = px.clone();
        }
        for (slot, px) in resolved.sprites.iter_mut().zip(self.sprites.iter()) {
            *slot = px.clone();
        }
        resolved
    }
}

/// State shared between the engine handle, the frame loop and every wired
/// callback. Single-threaded host: cells are written by one callback and
/// read by the next frame, never concurrently.
pub struct EngineShared {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub scroll_progress: Cell<f32>,
    pub disposed: Cell<bool>,
    pub raf_id: Cell<Option<i32>>,
    pub frame_closure: RefCell<Option<Closure<dyn FnMut()>>>,
    pub ctx: RefCell<Option<Rc<RefCell<frame::FrameContext>>>>,
    pub pointer: RefCell<Option<events::pointer::PointerWiring>>,
    pub resize: RefCell<Option<events::resize::ResizeCoordinator>>,
}

/// Live engine handle returned by [`start`].
#[wasm_bindgen]
pub struct Backdrop {
    shared: Rc<EngineShared>,
}

/// Start the backdrop inside `container`.
///
/// Fails synchronously, before any listener is attached, when the container
/// is not part of the document. GPU bring-up continues asynchronously; until
/// it completes the container shows an empty canvas.
#[wasm_bindgen]
pub fn start(
    container: web::HtmlElement,
    assets: &BackdropAssets,
    initial_scroll_progress: f64,
) -> Result<Backdrop, JsValue> {
    if !container.is_connected() {
        return Err(JsValue::from_str(
            "backdrop container is not attached to the document",
        ));
    }
    start_engine(container, assets.resolve(), initial_scroll_progress)
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn start_engine(
    container: web::HtmlElement,
    resolved: render::ResolvedAssets,
    initial_scroll_progress: f64,
) -> anyhow::Result<Backdrop> {
    let canvas = dom::create_canvas(&container)?;
    let shared = Rc::new(EngineShared {
        container,
        canvas,
        scroll_progress: Cell::new(scroll::doubled(initial_scroll_progress)),
        disposed: Cell::new(false),
        raf_id: Cell::new(None),
        frame_closure: RefCell::new(None),
        ctx: RefCell::new(None),
        pointer: RefCell::new(None),
        resize: RefCell::new(None),
    });

    *shared.pointer.borrow_mut() = Some(events::pointer::wire_pointer_handlers(&shared));
    *shared.resize.borrow_mut() = Some(events::resize::wire_resize(&shared)?);

    let shared_init = shared.clone();
    spawn_local(async move {
        if let Err(e) = init_engine(shared_init, resolved).await {
            log::error!("init error: {:?}", e);
        }
    });

    Ok(Backdrop { shared })
}

async fn init_engine(
    shared: Rc<EngineShared>,
    resolved: render::ResolvedAssets,
) -> anyhow::Result<()> {
    // Device class is fixed here, from the viewport at startup; only the
    // scroll-scale limit tracks the live width afterwards.
    let config = SceneConfig::for_viewport(dom::viewport_width());
    log::info!(
        "[engine] stars={} sphere_r={:.0} field_r={:.0}",
        config.star_count,
        config.sphere_radius,
        config.star_field_radius
    );

    let scene = SceneGraph::new(config, STAR_LAYER_SEED);
    let particles = ParticleField::new(&config, PARTICLE_FIELD_SEED);
    let aspect = shared.canvas.width().max(1) as f32 / shared.canvas.height().max(1) as f32;
    let rig = CameraRig::new(&config, aspect);

    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(shared.canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &scene, &resolved).await?;

    if shared.disposed.get() {
        // disposed while the adapter was coming up; nothing to wire
        return Ok(());
    }

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        particles,
        scheduler: FrameScheduler::new(),
        rig,
        gpu,
        canvas: shared.canvas.clone(),
        shared: shared.clone(),
        last_instant: Instant::now(),
    }));
    *shared.ctx.borrow_mut() = Some(ctx);
    frame::start_loop(shared);
    Ok(())
}

#[wasm_bindgen]
impl Backdrop {
    /// Feed the page's [0, 1] scroll progress; the engine doubles it.
    pub fn update_scroll_progress(&self, value: f64) {
        self.shared.scroll_progress.set(scroll::doubled(value));
    }

    /// Stop the loop and release every listener, timer and DOM node.
    /// Safe to call more than once, and at any point of the async bring-up.
    pub fn dispose(&mut self) {
        let shared = &self.shared;
        if shared.disposed.replace(true) {
            return;
        }
        if let (Some(window), Some(id)) = (web::window(), shared.raf_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        shared.frame_closure.borrow_mut().take();
        if let Some(resize) = shared.resize.borrow_mut().take() {
            resize.unwire();
        }
        if let Some(pointer) = shared.pointer.borrow_mut().take() {
            pointer.unwire();
        }
        shared.ctx.borrow_mut().take();
        let _ = shared.container.remove_child(&shared.canvas);
        log::info!("backdrop disposed");
    }
}
