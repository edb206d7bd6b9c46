//! Solid closure: base cap and side walls.
//!
//! The top surface occupies vertices `0..res²`; the base occupies
//! `res²..2·res²` in the same row-major order. Every wall segment is two
//! triangles wound so each border edge is walked opposite to the way the
//! adjacent cap walks it, which keeps the closed mesh consistently
//! oriented with outward normals.

use relief_mesh::MeshBuffers;

use crate::projection::Projector;
use crate::surface::Quad;

/// Appends the base vertices and returns the index of the first one.
pub fn append_base_vertices(mesh: &mut MeshBuffers, res: usize, projector: &Projector) -> u32 {
    let offset = mesh.vertex_count() as u32;
    for y in 0..res {
        for x in 0..res {
            mesh.push_vertex(projector.base(x, y));
        }
    }
    offset
}

/// Triangulates the base, wound opposite to the top (facing down).
pub fn append_base_cap(mesh: &mut MeshBuffers, res: usize, offset: u32) {
    for y in 0..res - 1 {
        for x in 0..res - 1 {
            let q = Quad::at(offset, res, x, y);
            mesh.push_triangle(q.tl, q.tr, q.bl);
            mesh.push_triangle(q.tr, q.br, q.bl);
        }
    }
}

/// Joins the four top borders to the base borders.
pub fn append_side_walls(mesh: &mut MeshBuffers, res: usize, offset: u32) {
    let top = |x: usize, y: usize| (y * res + x) as u32;
    let base = |x: usize, y: usize| offset + (y * res + x) as u32;
    let last = res - 1;

    for i in 0..last {
        // Front (y = 0)
        let (t0, t1, b0, b1) = (top(i, 0), top(i + 1, 0), base(i, 0), base(i + 1, 0));
        mesh.push_triangle(t0, t1, b0);
        mesh.push_triangle(t1, b1, b0);

        // Back (y = last)
        let (t0, t1, b0, b1) = (top(i, last), top(i + 1, last), base(i, last), base(i + 1, last));
        mesh.push_triangle(t0, b0, t1);
        mesh.push_triangle(t1, b0, b1);

        // Left (x = 0)
        let (t0, t1, b0, b1) = (top(0, i), top(0, i + 1), base(0, i), base(0, i + 1));
        mesh.push_triangle(t1, t0, b1);
        mesh.push_triangle(t0, b0, b1);

        // Right (x = last)
        let (t0, t1, b0, b1) = (top(last, i), top(last, i + 1), base(last, i), base(last, i + 1));
        mesh.push_triangle(t0, t1, b0);
        mesh.push_triangle(t1, b1, b0);
    }
}
