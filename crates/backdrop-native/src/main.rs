//! Desktop preview for the backdrop scene.
//!
//! Runs the same core simulation and shader as the web build inside a winit
//! window, with flat placeholder materials instead of page-supplied images.
//! There is no scroll source on the desktop, so the scene stays at scale 1.

use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use backdrop_core::{
    Camera, CameraRig, FrameScheduler, ParticleField, PixelData, SceneConfig, SceneGraph,
    SPHERE_SPIN_STEP,
};
use glam::Vec3;

const FIELD_SEED: u64 = 42;
const LAYER_SEED: u64 = 7;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshParams {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointParams {
    tint: [f32; 4],
    size: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

struct MeshDraw {
    params_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
}

struct PointDraw {
    bind_group: wgpu::BindGroup,
    instance_buf: wgpu::Buffer,
    instance_count: u32,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    sphere: MeshDraw,
    logo: MeshDraw,
    layers: Vec<PointDraw>,
    field: PointDraw,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, scene: &SceneGraph) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(backdrop_core::SCENE_WGSL.into()),
        });

        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });

        let mesh_bgl = textured_uniform_bgl(&device, "mesh_bgl", 0);
        let point_bgl = textured_uniform_bgl(&device, "point_bgl", 3);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&globals_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let point_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("point_pl"),
            bind_group_layouts: &[&globals_bgl, &point_bgl],
            push_constant_ranges: &[],
        });

        let mesh_vertex_layout = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];
        let point_vertex_layout = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                }],
            },
        ];

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&mesh_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &mesh_vertex_layout,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("point_pipeline"),
            layout: Some(&point_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_point"),
                buffers: &point_vertex_layout,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_point"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = create_vertex_buffer(&device, "quad_vb", bytemuck::cast_slice(&quad_vertices));

        let sphere_pixels = PixelData::placeholder([10, 12, 24, 255]);
        let logo_pixels = PixelData::placeholder([235, 235, 245, 255]);
        let sprite_pixels = PixelData::placeholder([255, 255, 255, 255]);

        let (sphere_vertices, sphere_indices) = build_sphere_mesh(16, 24);
        let sphere = build_mesh_draw(
            &device,
            &queue,
            &mesh_bgl,
            &sampler,
            "sphere",
            &sphere_vertices,
            &sphere_indices,
            &sphere_pixels,
        );

        let logo_vertices = [
            MeshVertex {
                position: [-0.5, -0.5, 0.0],
                uv: [0.0, 1.0],
            },
            MeshVertex {
                position: [0.5, -0.5, 0.0],
                uv: [1.0, 1.0],
            },
            MeshVertex {
                position: [0.5, 0.5, 0.0],
                uv: [1.0, 0.0],
            },
            MeshVertex {
                position: [-0.5, 0.5, 0.0],
                uv: [0.0, 0.0],
            },
        ];
        let logo_indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
        let logo = build_mesh_draw(
            &device,
            &queue,
            &mesh_bgl,
            &sampler,
            "logo",
            &logo_vertices,
            &logo_indices,
            &logo_pixels,
        );

        let mut layers = Vec::with_capacity(scene.layers.len());
        for layer in scene.layers.iter() {
            let instance_buf =
                create_vertex_buffer(&device, "layer_instances", bytemuck::cast_slice(&layer.positions));
            layers.push(build_point_draw(
                &device,
                &queue,
                &point_bgl,
                &sampler,
                "layer",
                instance_buf,
                (layer.positions.len() / 3) as u32,
                layer.point_size,
                &sprite_pixels,
            ));
        }

        let star_count = scene.config.star_count;
        let field_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_instances"),
            size: (star_count * 3 * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let field = build_point_draw(
            &device,
            &queue,
            &point_bgl,
            &sampler,
            "field",
            field_instances,
            star_count as u32,
            scene.config.particle_size,
            &sprite_pixels,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            point_pipeline,
            globals_buf,
            globals_bg,
            quad_vb,
            sphere,
            logo,
            layers,
            field,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &mut self,
        scene: &SceneGraph,
        camera: &Camera,
        star_positions: &[f32],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.globals_buf,
            0,
            bytemuck::bytes_of(&Globals {
                view: camera.view_matrix().to_cols_array_2d(),
                proj: camera.projection_matrix().to_cols_array_2d(),
            }),
        );
        self.queue.write_buffer(
            &self.sphere.params_buf,
            0,
            bytemuck::bytes_of(&MeshParams {
                model: scene.sphere_transform().to_cols_array_2d(),
                tint: [1.0, 1.0, 1.0, 1.0],
            }),
        );
        self.queue.write_buffer(
            &self.logo.params_buf,
            0,
            bytemuck::bytes_of(&MeshParams {
                model: scene.logo_transform(camera.eye).to_cols_array_2d(),
                tint: [1.0, 1.0, 1.0, 1.0],
            }),
        );
        self.queue
            .write_buffer(&self.field.instance_buf, 0, bytemuck::cast_slice(star_positions));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.01,
                            g: 0.01,
                            b: 0.03,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for draw in [&self.sphere, &self.logo] {
                rpass.set_bind_group(1, &draw.bind_group, &[]);
                rpass.set_vertex_buffer(0, draw.vertex_buf.slice(..));
                rpass.set_index_buffer(draw.index_buf.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..draw.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.point_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            for draw in self.layers.iter().chain(std::iter::once(&self.field)) {
                rpass.set_bind_group(1, &draw.bind_group, &[]);
                rpass.set_vertex_buffer(1, draw.instance_buf.slice(..));
                rpass.draw(0..6, 0..draw.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Starfall backdrop (native preview)")
        .build(&event_loop)
        .expect("window");

    let size = window.inner_size();
    let config = SceneConfig::for_viewport(size.width);
    log::info!(
        "[engine] stars={} sphere_r={:.0} field_r={:.0}",
        config.star_count,
        config.sphere_radius,
        config.star_field_radius
    );

    let mut scene = SceneGraph::new(config, LAYER_SEED);
    let mut particles = ParticleField::new(&config, FIELD_SEED);
    let mut scheduler = FrameScheduler::new();
    let mut rig = CameraRig::new(
        &config,
        size.width.max(1) as f32 / size.height.max(1) as f32,
    );

    let mut state = pollster::block_on(GpuState::new(&window, &scene)).expect("gpu");
    let mut last = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(new_size),
                ..
            } => {
                state.resize(new_size);
                rig.set_aspect(new_size.width.max(1) as f32 / new_size.height.max(1) as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = now - last;
                last = now;
                if scheduler.advance(dt) {
                    particles.step();
                    scene.rotate_step(Vec3::from(SPHERE_SPIN_STEP));
                    rig.update(dt.as_secs_f32());
                    match state.render(&scene, &rig.camera, particles.positions()) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = state.window.inner_size();
                            state.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(_) => {}
                    }
                }
                state.window.request_redraw();
            }
            _ => {}
        })
        .unwrap();
}

fn create_vertex_buffer(device: &wgpu::Device, label: &str, contents: &[u8]) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage: wgpu::BufferUsages::VERTEX,
    })
}

fn textured_uniform_bgl(
    device: &wgpu::Device,
    label: &str,
    first_binding: u32,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: first_binding,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: first_binding + 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: first_binding + 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    pixels: &PixelData,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: pixels.width,
        height: pixels.height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * pixels.width),
            rows_per_image: Some(pixels.height),
        },
        size,
    );
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

#[allow(clippy::too_many_arguments)]
fn build_mesh_draw(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    vertices: &[MeshVertex],
    indices: &[u16],
    pixels: &PixelData,
) -> MeshDraw {
    use wgpu::util::DeviceExt;
    let params_buf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<MeshParams>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let tex_view = upload_texture(device, queue, label, pixels);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buf.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&tex_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    MeshDraw {
        params_buf,
        bind_group,
        vertex_buf,
        index_buf,
        index_count: indices.len() as u32,
    }
}

#[allow(clippy::too_many_arguments)]
fn build_point_draw(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    instance_buf: wgpu::Buffer,
    instance_count: u32,
    point_size: f32,
    pixels: &PixelData,
) -> PointDraw {
    use wgpu::util::DeviceExt;
    let params_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(&PointParams {
            tint: [1.0, 1.0, 1.0, 1.0],
            size: point_size,
            _pad: [0.0; 3],
        }),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let tex_view = upload_texture(device, queue, label, pixels);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 3,
                resource: params_buf.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::TextureView(&tex_view),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    PointDraw {
        bind_group,
        instance_buf,
        instance_count,
    }
}

/// Lat-long unit sphere; indices fit u16 at this tessellation.
fn build_sphere_mesh(stacks: u32, slices: u32) -> (Vec<MeshVertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            vertices.push(MeshVertex {
                position: dir.to_array(),
                uv: [j as f32 / slices as f32, i as f32 / stacks as f32],
            });
        }
    }
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u16;
            let b = a + slices as u16 + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}
