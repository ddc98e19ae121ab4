// SPDX-License-Identifier: MPL-2.0
//! 3D model decoding from glTF binaries (`.glb`).
//!
//! Every triangle primitive of the scene is flattened into one indexed mesh
//! in scene space. The mesh is then centred on the origin and scaled so its
//! largest side is one unit, the size the orbit camera frames.

use crate::error::MediaError;
use bytemuck::{Pod, Zeroable};
use gltf::buffer::Source;
use gltf::mesh::Mode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Colour of primitives without a material.
const DEFAULT_COLOR: [f32; 4] = [0.8, 0.78, 0.74, 1.0];

/// Deepest node hierarchy accepted.
const MAX_NODE_DEPTH: usize = 64;

const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

static NEXT_MODEL_ID: AtomicU64 = AtomicU64::new(1);

/// Column-major 4x4 matrix, as glTF stores node transforms.
type Mat4 = [[f32; 4]; 4];

/// One vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Base colour of the material, linear RGBA.
    pub color: [f32; 4],
}

/// A decoded model ready for display.
///
/// Clones share the geometry. The id changes only when a new model is
/// decoded, so the renderer uploads each model once.
#[derive(Debug, Clone)]
pub struct ModelData {
    id: u64,
    vertices: Arc<[Vertex]>,
    indices: Arc<[u32]>,
}

impl ModelData {
    fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            id: NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed),
            vertices: vertices.into(),
            indices: indices.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        bounds(&self.vertices)
    }
}

/// Decodes a glTF binary into a normalized mesh.
///
/// `name` is the URL the bytes came from and is only used for logging.
/// Buffers referenced by URI are not followed; everything must live in the
/// binary chunk.
pub fn decode(name: &str, bytes: &[u8]) -> Result<ModelData, MediaError> {
    let gltf = gltf::Gltf::from_slice(bytes).map_err(|e| MediaError::Decode(e.to_string()))?;
    let blob = gltf.blob.as_deref();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| MediaError::Decode("model has no scene".into()))?;

    let mut mesh = MeshBuilder::default();
    for node in scene.nodes() {
        mesh.visit(&node, &IDENTITY, blob, 0)?;
    }
    if mesh.indices.is_empty() {
        return Err(MediaError::Decode("model has no triangles".into()));
    }
    mesh.normalize();

    tracing::debug!(
        %name,
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len() / 3,
        "decoded model"
    );
    Ok(ModelData::new(mesh.vertices, mesh.indices))
}

#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn visit(
        &mut self,
        node: &gltf::Node<'_>,
        parent: &Mat4,
        blob: Option<&[u8]>,
        depth: usize,
    ) -> Result<(), MediaError> {
        if depth > MAX_NODE_DEPTH {
            return Err(MediaError::Decode("node hierarchy too deep".into()));
        }
        let world = multiply(parent, &node.transform().matrix());

        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                self.add_primitive(&primitive, &world, blob)?;
            }
        }
        for child in node.children() {
            self.visit(&child, &world, blob, depth + 1)?;
        }
        Ok(())
    }

    fn add_primitive(
        &mut self,
        primitive: &gltf::Primitive<'_>,
        world: &Mat4,
        blob: Option<&[u8]>,
    ) -> Result<(), MediaError> {
        if primitive.mode() != Mode::Triangles {
            tracing::debug!(mode = ?primitive.mode(), "skipping non-triangle primitive");
            return Ok(());
        }
        let reader = primitive.reader(|buffer| match buffer.source() {
            Source::Bin => blob,
            Source::Uri(_) => None,
        });
        let Some(positions) = reader.read_positions() else {
            return Ok(());
        };
        let positions: Vec<[f32; 3]> = positions.map(|p| transform_point(world, p)).collect();
        let count = positions.len();

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..u32::try_from(count).map_err(|_| too_large())?).collect(),
        };
        if indices.iter().any(|&i| i as usize >= count) {
            return Err(MediaError::Decode("index out of range".into()));
        }

        let normals: Vec<[f32; 3]> = match reader.read_normals() {
            Some(normals) if normals.len() == count => {
                normals.map(|n| transform_normal(world, n)).collect()
            }
            _ => face_normals(&positions, &indices),
        };

        let color = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();
        let color = if primitive.material().index().is_some() {
            color
        } else {
            DEFAULT_COLOR
        };

        let base = u32::try_from(self.vertices.len()).map_err(|_| too_large())?;
        self.vertices
            .extend(positions.into_iter().zip(normals).map(|(position, normal)| Vertex {
                position,
                normal,
                color,
            }));
        for index in indices.chunks_exact(3).flatten() {
            self.indices
                .push(base.checked_add(*index).ok_or_else(too_large)?);
        }
        Ok(())
    }

    /// Centres the mesh on the origin and fits its largest side to one unit.
    fn normalize(&mut self) {
        let (min, max) = bounds(&self.vertices);
        let center: [f32; 3] = std::array::from_fn(|i| (min[i] + max[i]) / 2.0);
        let extent = (0..3).map(|i| max[i] - min[i]).fold(0.0_f32, f32::max);
        let scale = if extent > f32::EPSILON { 1.0 / extent } else { 1.0 };
        for vertex in &mut self.vertices {
            vertex.position = std::array::from_fn(|i| (vertex.position[i] - center[i]) * scale);
        }
    }
}

fn too_large() -> MediaError {
    MediaError::Decode("model too large".into())
}

fn bounds(vertices: &[Vertex]) -> ([f32; 3], [f32; 3]) {
    if vertices.is_empty() {
        return ([0.0; 3], [0.0; 3]);
    }
    vertices.iter().fold(
        ([f32::INFINITY; 3], [f32::NEG_INFINITY; 3]),
        |(min, max), vertex| {
            (
                std::array::from_fn(|i| min[i].min(vertex.position[i])),
                std::array::from_fn(|i| max[i].max(vertex.position[i])),
            )
        },
    )
}

fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    std::array::from_fn(|col| std::array::from_fn(|row| (0..4).map(|k| a[k][row] * b[col][k]).sum()))
}

fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    std::array::from_fn(|row| m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row])
}

fn transform_normal(m: &Mat4, n: [f32; 3]) -> [f32; 3] {
    normalize(std::array::from_fn(|row| {
        m[0][row] * n[0] + m[1][row] * n[1] + m[2][row] * n[2]
    }))
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length > f32::EPSILON {
        v.map(|c| c / length)
    } else {
        [0.0, 1.0, 0.0]
    }
}

/// Smooth normals from the triangles touching each vertex, for meshes that
/// ship without them.
fn face_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0_f32; 3]; positions.len()];
    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|k| positions[triangle[k] as usize]);
        let u: [f32; 3] = std::array::from_fn(|i| b[i] - a[i]);
        let v: [f32; 3] = std::array::from_fn(|i| c[i] - a[i]);
        let face = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        for &index in triangle {
            let normal = &mut normals[index as usize];
            for i in 0..3 {
                normal[i] += face[i];
            }
        }
    }
    normals.into_iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use serde_json::json;

    /// Packs a glTF document and its binary buffer into a `.glb`.
    fn glb(document: &serde_json::Value, bin: &[u8]) -> Vec<u8> {
        let mut json = serde_json::to_vec(document).unwrap();
        while json.len() % 4 != 0 {
            json.push(b' ');
        }
        let mut bin = bin.to_vec();
        while bin.len() % 4 != 0 {
            bin.push(0);
        }
        let bin_chunk = if bin.is_empty() { 0 } else { 8 + bin.len() };
        let total = 12 + 8 + json.len() + bin_chunk;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json);
        if !bin.is_empty() {
            out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
            out.extend_from_slice(b"BIN\0");
            out.extend_from_slice(&bin);
        }
        out
    }

    /// One triangle, 4 units wide, under a node that moves it by `offset`.
    fn triangle_glb(offset: [f32; 3], with_indices: bool) -> Vec<u8> {
        let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
        let mut bin: Vec<u8> = positions
            .iter()
            .flatten()
            .flat_map(|c| c.to_le_bytes())
            .collect();
        let mut primitive = json!({ "attributes": { "POSITION": 0 } });
        let mut accessors = vec![json!({
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0.0, 0.0, 0.0], "max": [4.0, 2.0, 0.0],
        })];
        let mut views = vec![json!({ "buffer": 0, "byteOffset": 0, "byteLength": 36 })];
        if with_indices {
            bin.extend([0u16, 1, 2].iter().flat_map(|i| i.to_le_bytes()));
            primitive["indices"] = json!(1);
            accessors.push(json!({
                "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR",
            }));
            views.push(json!({ "buffer": 0, "byteOffset": 36, "byteLength": 6 }));
        }
        let byte_length = bin.len().div_ceil(4) * 4;
        let document = json!({
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [{ "nodes": [0] }],
            "nodes": [{ "mesh": 0, "translation": offset }],
            "meshes": [{ "primitives": [primitive] }],
            "accessors": accessors,
            "bufferViews": views,
            "buffers": [{ "byteLength": byte_length }],
        });
        glb(&document, &bin)
    }

    #[test]
    fn triangle_is_centred_and_fitted() {
        let model = decode("tri.glb", &triangle_glb([10.0, -3.0, 5.0], true)).unwrap();
        assert_eq!(model.triangle_count(), 1);

        let (min, max) = model.bounds();
        assert_abs_diff_eq!(max[0] - min[0], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(max[1] - min[1], 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(min[0] + max[0], 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(min[1] + max[1], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn missing_normals_and_indices_are_derived() {
        let model = decode("tri.glb", &triangle_glb([0.0; 3], false)).unwrap();
        assert_eq!(model.indices(), &[0, 1, 2]);
        for vertex in model.vertices() {
            assert_abs_diff_eq!(vertex.normal[2], 1.0, epsilon = 1e-5);
            assert_eq!(vertex.color, DEFAULT_COLOR);
        }
    }

    #[test]
    fn every_decode_gets_a_new_id() {
        let bytes = triangle_glb([0.0; 3], true);
        let first = decode("a.glb", &bytes).unwrap();
        let second = decode("a.glb", &bytes).unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(first.clone().id(), first.id());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode("bad.glb", b"not a model"),
            Err(MediaError::Decode(_))
        ));
    }

    #[test]
    fn scene_without_meshes_is_rejected() {
        let document = json!({
            "asset": { "version": "2.0" },
            "scenes": [{ "nodes": [0] }],
            "nodes": [{ "name": "empty" }],
        });
        let err = decode("empty.glb", &glb(&document, &[])).unwrap_err();
        assert_eq!(err, MediaError::Decode("model has no triangles".into()));
    }

    #[test]
    fn node_transforms_compose() {
        let translate = |x: f32| -> Mat4 {
            let mut m = IDENTITY;
            m[3][0] = x;
            m
        };
        let world = multiply(&translate(2.0), &translate(3.0));
        assert_eq!(transform_point(&world, [1.0, 0.0, 0.0]), [6.0, 0.0, 0.0]);
    }
}
