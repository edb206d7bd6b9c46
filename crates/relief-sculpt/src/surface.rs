//! Top-surface projection and adaptive triangulation.

use relief_field::HeightField;
use relief_mesh::MeshBuffers;

use crate::projection::Projector;

/// Corner indices of the grid quad whose top-left sample is `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub tl: u32,
    pub tr: u32,
    pub bl: u32,
    pub br: u32,
}

impl Quad {
    #[inline]
    pub fn at(offset: u32, res: usize, x: usize, y: usize) -> Self {
        let tl = offset + (y * res + x) as u32;
        let bl = offset + ((y + 1) * res + x) as u32;
        Self {
            tl,
            tr: tl + 1,
            bl,
            br: bl + 1,
        }
    }
}

/// Which diagonal splits a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Top-left ↔ bottom-right.
    Main,
    /// Top-right ↔ bottom-left.
    Anti,
}

/// Picks the diagonal with the smaller height jump.
///
/// Ties go to the anti-diagonal, which is also the fixed split.
#[inline]
pub fn choose_diagonal(h_tl: f32, h_tr: f32, h_bl: f32, h_br: f32) -> Diagonal {
    if (h_tl - h_br).abs() < (h_tr - h_bl).abs() {
        Diagonal::Main
    } else {
        Diagonal::Anti
    }
}

/// Appends one vertex per field sample, row-major.
pub fn project_top(mesh: &mut MeshBuffers, field: &HeightField, projector: &Projector) {
    let res = field.resolution();
    for y in 0..res {
        for x in 0..res {
            mesh.push_vertex(projector.top(x, y, field.get(x, y)));
        }
    }
}

/// Triangulates the top surface (vertices `0..res²`), wound to face up.
pub fn triangulate_top(mesh: &mut MeshBuffers, field: &HeightField, adaptive: bool) {
    let res = field.resolution();
    for y in 0..res - 1 {
        for x in 0..res - 1 {
            let q = Quad::at(0, res, x, y);
            let diagonal = if adaptive {
                choose_diagonal(
                    field.get(x, y),
                    field.get(x + 1, y),
                    field.get(x, y + 1),
                    field.get(x + 1, y + 1),
                )
            } else {
                Diagonal::Anti
            };
            match diagonal {
                Diagonal::Main => {
                    mesh.push_triangle(q.tl, q.bl, q.br);
                    mesh.push_triangle(q.tl, q.br, q.tr);
                }
                Diagonal::Anti => {
                    mesh.push_triangle(q.tl, q.bl, q.tr);
                    mesh.push_triangle(q.tr, q.bl, q.br);
                }
            }
        }
    }
}
