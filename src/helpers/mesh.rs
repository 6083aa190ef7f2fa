use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::Mesh;
use std::f32::consts::PI;

/// Flat petal in the XY plane, base at the origin and tip at `+Y * length`.
/// Built as a triangle fan around the midpoint of the center line.
pub fn petal_mesh(length: f32, width: f32, segments: usize) -> Mesh {
    let segments = segments.max(2);
    let mut positions = Vec::with_capacity(segments * 2 + 1);
    let mut uvs = Vec::with_capacity(segments * 2 + 1);

    // 0: fan center
    positions.push([0.0, length * 0.5, 0.0]);
    uvs.push([0.5, 0.5]);

    // right edge from base to tip, then left edge from tip back to base
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        positions.push([petal_half_width(t, width), t * length, 0.0]);
        uvs.push([0.5 + 0.5 * petal_half_width(t, 1.0), t]);
    }
    for i in (1..segments).rev() {
        let t = i as f32 / segments as f32;
        positions.push([-petal_half_width(t, width), t * length, 0.0]);
        uvs.push([0.5 - 0.5 * petal_half_width(t, 1.0), t]);
    }

    let rim = positions.len() as u32 - 1;
    let mut indices = Vec::with_capacity(rim as usize * 3);
    for i in 1..=rim {
        let next = if i == rim { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

// widest a little below the middle, pointed at both ends
fn petal_half_width(t: f32, width: f32) -> f32 {
    0.5 * width * (PI * t).sin() * (1.0 - 0.35 * t)
}
