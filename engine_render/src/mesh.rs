//! Built-in primitive geometry
//!
//! The editor viewport draws primitives as wireframes, so a mesh here is just
//! corner positions and the edges between them.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct WireMesh {
    pub positions: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl WireMesh {
    /// Unit cube centred on the origin
    pub fn cube() -> Self {
        let positions = (0..8)
            .map(|corner| {
                Vec3::new(
                    if corner & 1 == 0 { -0.5 } else { 0.5 },
                    if corner & 2 == 0 { -0.5 } else { 0.5 },
                    if corner & 4 == 0 { -0.5 } else { 0.5 },
                )
            })
            .collect();

        // Corners differing in exactly one bit share an edge.
        let mut edges = Vec::with_capacity(12);
        for a in 0u32..8 {
            for bit in [1u32, 2, 4] {
                let b = a | bit;
                if b != a {
                    edges.push([a, b]);
                }
            }
        }

        Self { positions, edges }
    }

    /// Corner positions after applying `model`
    pub fn transformed(&self, model: Mat4) -> Vec<Vec3> {
        self.positions
            .iter()
            .map(|p| model.transform_point3(*p))
            .collect()
    }
}
