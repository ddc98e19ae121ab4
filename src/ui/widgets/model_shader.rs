// SPDX-License-Identifier: MPL-2.0
//! GPU rendering of 3D models using a custom wgpu pipeline.
//!
//! # Architecture
//!
//! [`ModelShader`] is an iced `shader` program. Each decoded model is
//! uploaded to vertex and index buffers once and dropped at the end of the
//! first frame that no longer draws it. Camera uniforms and widget bounds
//! are kept per [`StageSlot`], because the inline viewer stays drawn under
//! an open modal and both may show a model in the same frame.

use crate::media::model::{ModelData, Vertex};
use crate::ui::viewer::subcomponents::model_stage;
use bytemuck::{Pod, Zeroable};
use iced::widget::shader::{self, Viewport};
use iced::{mouse, Element, Length, Rectangle, Size};
use std::collections::{HashMap, HashSet};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Which viewer a stage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageSlot {
    Inline,
    Modal,
}

/// Per-draw values shared by both shader stages.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Uniforms {
    view_projection: [[f32; 4]; 4],
    /// Model-space light direction; `w` is the ambient term.
    light: [f32; 4],
}

impl Uniforms {
    const AMBIENT: f32 = 0.3;

    fn new(camera: &model_stage::State, viewport: Size) -> Self {
        let [x, y, z] = camera.headlight();
        Self {
            view_projection: camera.view_projection(viewport),
            light: [x, y, z, Self::AMBIENT],
        }
    }
}

/// A decoded model seen through the orbit camera.
#[derive(Debug, Clone)]
pub struct ModelShader {
    pub model: ModelData,
    pub camera: model_stage::State,
    pub slot: StageSlot,
}

impl ModelShader {
    /// Creates an Element filling the stage.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        shader::Shader::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> shader::Program<Message> for ModelShader {
    type State = ();
    type Primitive = ModelPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        bounds: Rectangle,
    ) -> Self::Primitive {
        ModelPrimitive {
            model: self.model.clone(),
            slot: self.slot,
            uniforms: Uniforms::new(&self.camera, bounds.size()),
        }
    }
}

/// The rendering primitive for one model stage.
#[derive(Debug, Clone)]
pub struct ModelPrimitive {
    model: ModelData,
    slot: StageSlot,
    uniforms: Uniforms,
}

impl shader::Primitive for ModelPrimitive {
    type Pipeline = ModelPipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        pipeline.upload_mesh(device, &self.model);
        pipeline.prepare_stage(device, queue, self, bounds, viewport);
        pipeline.ensure_depth(device, viewport.physical_size());
    }

    fn render(
        &self,
        pipeline: &Self::Pipeline,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        pipeline.render(encoder, target, clip_bounds, self.slot);
    }
}

struct GpuMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

struct GpuStage {
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    model: u64,
    /// Full widget bounds in physical pixels; render() only sees the clip.
    physical_bounds: Rectangle<f32>,
}

struct DepthTarget {
    view: wgpu::TextureView,
    size: Size<u32>,
}

/// The wgpu pipeline for rendering model stages.
pub struct ModelPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_layout: wgpu::BindGroupLayout,
    meshes: HashMap<u64, GpuMesh>,
    drawn: HashSet<u64>,
    stages: HashMap<StageSlot, GpuStage>,
    depth: Option<DepthTarget>,
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

impl shader::Pipeline for ModelPipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Model Shader"),
            source: wgpu::ShaderSource::Wgsl(MODEL_SHADER.into()),
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Model Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Model Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            // Scans are not guaranteed to be closed or consistently wound.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_layout,
            meshes: HashMap::new(),
            drawn: HashSet::new(),
            stages: HashMap::new(),
            depth: None,
        }
    }

    fn trim(&mut self) {
        let drawn = std::mem::take(&mut self.drawn);
        self.meshes.retain(|id, _| drawn.contains(id));
    }
}

impl ModelPipeline {
    fn upload_mesh(&mut self, device: &wgpu::Device, model: &ModelData) {
        self.drawn.insert(model.id());
        if self.meshes.contains_key(&model.id()) {
            return;
        }
        let Ok(index_count) = u32::try_from(model.indices().len()) else {
            tracing::warn!(triangles = model.triangle_count(), "model too large to draw");
            return;
        };

        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Vertex Buffer"),
            contents: bytemuck::cast_slice(model.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Index Buffer"),
            contents: bytemuck::cast_slice(model.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });
        tracing::debug!(model = model.id(), triangles = model.triangle_count(), "uploaded model");

        self.meshes.insert(
            model.id(),
            GpuMesh {
                vertices,
                indices,
                index_count,
            },
        );
    }

    fn prepare_stage(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        primitive: &ModelPrimitive,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        let layout = &self.uniform_layout;
        let stage = self.stages.entry(primitive.slot).or_insert_with(|| {
            let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Model Uniform Buffer"),
                size: std::mem::size_of::<Uniforms>() as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Model Uniform Bind Group"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                }],
            });
            GpuStage {
                uniforms,
                bind_group,
                model: 0,
                physical_bounds: Rectangle::default(),
            }
        });

        queue.write_buffer(&stage.uniforms, 0, bytemuck::bytes_of(&primitive.uniforms));
        stage.model = primitive.model.id();
        stage.physical_bounds = physical_bounds(bounds, viewport.scale_factor());
    }

    fn ensure_depth(&mut self, device: &wgpu::Device, size: Size<u32>) {
        if self.depth.as_ref().is_some_and(|depth| depth.size == size) {
            return;
        }
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Model Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        self.depth = Some(DepthTarget {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            size,
        });
    }

    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
        slot: StageSlot,
    ) {
        let Some(stage) = self.stages.get(&slot) else {
            return;
        };
        let (Some(mesh), Some(depth)) = (self.meshes.get(&stage.model), self.depth.as_ref()) else {
            return;
        };
        if clip_bounds.width == 0 || clip_bounds.height == 0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Model Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &stage.bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertices.slice(..));
        render_pass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);

        // Project into the whole widget; the scissor keeps the visible part.
        let wb = &stage.physical_bounds;
        render_pass.set_viewport(wb.x, wb.y, wb.width, wb.height, 0.0, 1.0);
        render_pass.set_scissor_rect(
            clip_bounds.x,
            clip_bounds.y,
            clip_bounds.width,
            clip_bounds.height,
        );

        render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}

fn physical_bounds(bounds: &Rectangle, scale: f32) -> Rectangle<f32> {
    Rectangle {
        x: bounds.x * scale,
        y: bounds.y * scale,
        width: bounds.width * scale,
        height: bounds.height * scale,
    }
}

/// WGSL shader for model rendering: two-sided diffuse lighting from a
/// light that follows the camera, over the material's base colour.
const MODEL_SHADER: &str = r#"
struct Uniforms {
    view_projection: mat4x4<f32>,
    light: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) color: vec4<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var output: VertexOutput;
    output.position = uniforms.view_projection * vec4<f32>(input.position, 1.0);
    output.normal = input.normal;
    output.color = input.color;
    return output;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(input.normal);
    let diffuse = abs(dot(normal, normalize(uniforms.light.xyz)));
    let ambient = uniforms.light.w;
    let shade = ambient + (1.0 - ambient) * diffuse;
    return vec4<f32>(input.color.rgb * shade, input.color.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn uniforms_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 80);
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
        assert_eq!(
            VERTEX_ATTRIBUTES.last().map(|attribute| attribute.offset),
            Some(24)
        );
    }

    #[test]
    fn uniforms_carry_camera_and_ambient() {
        let camera = model_stage::State::default();
        let viewport = Size::new(320.0, 240.0);
        let uniforms = Uniforms::new(&camera, viewport);
        assert_eq!(uniforms.view_projection, camera.view_projection(viewport));
        assert_abs_diff_eq!(uniforms.light[3], Uniforms::AMBIENT);
    }

    #[test]
    fn physical_bounds_scale_with_display() {
        let bounds = Rectangle::new(iced::Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        let physical = physical_bounds(&bounds, 2.0);
        assert_abs_diff_eq!(physical.x, 20.0);
        assert_abs_diff_eq!(physical.height, 100.0);
    }
}
