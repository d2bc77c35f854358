//! Construction of simple meshes.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::mesh::{
    ElementShape, ElementType, GridFunction, HexP1, MeshBuilderError, TetP1, UnstructuredMesh,
};

/// The six tetrahedra of the Kuhn subdivision of a hexahedron, around its diagonal `0-6`.
///
/// Corners are numbered like [`Aabb::vertices`].
pub const HEX_TO_TETS: [[usize; 4]; 6] = [
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
    [0, 5, 1, 6],
];

fn lattice_point(aabb: &Aabb, steps: [usize; 3], ijk: [usize; 3]) -> [Real; 3] {
    let mut pt = [0.0; 3];
    for d in 0..3 {
        let t = ijk[d] as Real / steps[d] as Real;
        pt[d] = aabb.mins[d] * (1.0 - t) + aabb.maxs[d] * t;
    }
    pt
}

/// Builds a continuous grid of `subdivs[0] x subdivs[1] x subdivs[2]` hexahedra of order `order` filling `aabb`.
///
/// Neighboring elements share their control points.
pub fn hex_grid<E: ElementType>(
    name: impl Into<String>,
    aabb: &Aabb,
    subdivs: [usize; 3],
    order: u32,
) -> Result<UnstructuredMesh<E>, MeshBuilderError> {
    if E::SHAPE != ElementShape::Tensor || E::DIM != 3 {
        return Err(MeshBuilderError::UnsupportedElement(E::NAME));
    }
    if subdivs.contains(&0) {
        return Err(MeshBuilderError::EmptyElements);
    }

    let p = order as usize;
    let steps = [subdivs[0] * p, subdivs[1] * p, subdivs[2] * p];
    let [sx, sy, _] = steps.map(|s| s + 1);
    let global = |i: usize, j: usize, k: usize| (i + sx * (j + sy * k)) as u32;

    let mut values = Vec::new();
    for k in 0..=steps[2] {
        for j in 0..=steps[1] {
            for i in 0..=steps[0] {
                values.push(lattice_point(aabb, steps, [i, j, k]));
            }
        }
    }

    let mut ctrl_idx = Vec::new();
    for ez in 0..subdivs[2] {
        for ey in 0..subdivs[1] {
            for ex in 0..subdivs[0] {
                for k in 0..=p {
                    for j in 0..=p {
                        for i in 0..=p {
                            ctrl_idx.push(global(ex * p + i, ey * p + j, ez * p + k));
                        }
                    }
                }
            }
        }
    }

    let dof_data = GridFunction::new(values, ctrl_idx, (p + 1).pow(3))?;
    UnstructuredMesh::new(name, dof_data, order)
}

/// Builds a continuous grid of linear tetrahedra filling `aabb`.
///
/// Each of the `subdivs[0] x subdivs[1] x subdivs[2]` cells is split into the
/// six tetrahedra of [`HEX_TO_TETS`].
pub fn tet_grid(
    name: impl Into<String>,
    aabb: &Aabb,
    subdivs: [usize; 3],
) -> Result<UnstructuredMesh<TetP1>, MeshBuilderError> {
    let hexes = hex_grid::<HexP1>("", aabb, subdivs, 1)?;
    let corners = HexP1::corner_dofs(1);
    let hex_dofs = hexes.dof_data();

    let mut ctrl_idx = Vec::with_capacity(hex_dofs.size_el * 24);
    for e in 0..hex_dofs.size_el {
        let dofs = hex_dofs.element_dofs(e);
        for tet in HEX_TO_TETS {
            ctrl_idx.extend(tet.iter().map(|c| dofs[corners[*c]]));
        }
    }

    let dof_data = GridFunction::new(hex_dofs.values.clone(), ctrl_idx, 4)?;
    UnstructuredMesh::new(name, dof_data, 1)
}

/// Builds a mesh made of a single tetrahedron of order `order` with the given corners.
///
/// The control points are evenly spaced, so the element is straight-sided.
pub fn single_tet<E: ElementType>(
    name: impl Into<String>,
    corners: [Point<Real>; 4],
    order: u32,
) -> Result<UnstructuredMesh<E>, MeshBuilderError> {
    if E::SHAPE != ElementShape::Simplex || E::DIM != 3 {
        return Err(MeshBuilderError::UnsupportedElement(E::NAME));
    }
    if order == 0 {
        return Err(MeshBuilderError::UnsupportedOrder {
            element: E::NAME,
            order,
        });
    }

    let p = order as usize;
    let [a, b, c, d] = corners;
    let mut values = Vec::new();

    for k in 0..=p {
        for j in 0..=p - k {
            for i in 0..=p - k - j {
                let (u, v, w) = (
                    i as Real / p as Real,
                    j as Real / p as Real,
                    k as Real / p as Real,
                );
                let pt = a + (b - a) * u + (c - a) * v + (d - a) * w;
                values.push([pt.x, pt.y, pt.z]);
            }
        }
    }

    let ctrl_idx = (0..values.len() as u32).collect();
    let el_dofs = values.len();
    let dof_data = GridFunction::new(values, ctrl_idx, el_dofs)?;
    UnstructuredMesh::new(name, dof_data, order)
}
