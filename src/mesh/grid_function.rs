use crate::math::Real;
use crate::mesh::MeshBuilderError;

/// Control-point values of an unstructured mesh or field, together with its element connectivity.
///
/// Each element references `el_dofs` control points through `ctrl_idx`: the
/// `l`-th local control point of the element `e` is
/// `values[ctrl_idx[e * el_dofs + l]]`. Control points may be shared between
/// elements (continuous data) or not (discontinuous data).
///
/// `N` is the number of components per control point: 3 for mesh coordinates,
/// 1 for scalar fields.
#[derive(Clone, Debug, PartialEq)]
pub struct GridFunction<const N: usize> {
    /// The per-control-point values.
    pub values: Vec<[Real; N]>,
    /// The element-to-control-point connectivity.
    pub ctrl_idx: Vec<u32>,
    /// The number of control points per element.
    pub el_dofs: usize,
    /// The number of elements.
    pub size_el: usize,
    /// The number of entries of `ctrl_idx`, i.e., `size_el * el_dofs`.
    pub size_ctrl: usize,
}

impl<const N: usize> GridFunction<N> {
    /// Creates a grid function after checking that the connectivity is consistent with the values.
    pub fn new(
        values: Vec<[Real; N]>,
        ctrl_idx: Vec<u32>,
        el_dofs: usize,
    ) -> Result<Self, MeshBuilderError> {
        if el_dofs == 0 {
            return Err(MeshBuilderError::EmptyElements);
        }

        if ctrl_idx.len() % el_dofs != 0 {
            return Err(MeshBuilderError::RaggedConnectivity {
                len: ctrl_idx.len(),
                el_dofs,
            });
        }

        if let Some(bad) = ctrl_idx.iter().find(|i| **i as usize >= values.len()) {
            return Err(MeshBuilderError::DofOutOfBounds {
                index: *bad,
                len: values.len(),
            });
        }

        let size_ctrl = ctrl_idx.len();
        Ok(Self {
            values,
            size_el: size_ctrl / el_dofs,
            size_ctrl,
            ctrl_idx,
            el_dofs,
        })
    }

    /// Creates a grid function with `M` zero-initialized components per control point,
    /// sharing the connectivity of `other`.
    pub fn with_topology_of<const M: usize>(other: &GridFunction<M>) -> Self {
        Self {
            values: vec![[0.0; N]; other.values.len()],
            ctrl_idx: other.ctrl_idx.clone(),
            el_dofs: other.el_dofs,
            size_el: other.size_el,
            size_ctrl: other.size_ctrl,
        }
    }

    /// Does `self` have the same connectivity as `other`?
    pub fn same_topology_as<const M: usize>(&self, other: &GridFunction<M>) -> bool {
        self.values.len() == other.values.len()
            && self.el_dofs == other.el_dofs
            && self.size_el == other.size_el
            && self.ctrl_idx == other.ctrl_idx
    }

    /// The number of control points.
    #[inline]
    pub fn dof_count(&self) -> usize {
        self.values.len()
    }

    /// The global control-point indices of the element `element`.
    #[inline]
    pub fn element_dofs(&self, element: usize) -> &[u32] {
        &self.ctrl_idx[element * self.el_dofs..(element + 1) * self.el_dofs]
    }

    /// The value of the `local`-th control point of the element `element`.
    #[inline]
    pub fn element_value(&self, element: usize, local: usize) -> &[Real; N] {
        &self.values[self.ctrl_idx[element * self.el_dofs + local] as usize]
    }
}
