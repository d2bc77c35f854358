use crate::math::Real;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::SortedPair;
use arrayvec::ArrayVec;

/// Where a vertex of the clipped mesh comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum VertexSource {
    /// An input control point, kept as-is.
    Dof(u32),
    /// The point at `t` along the segment from the control point `from` to the control point `to`.
    Cut { from: u32, to: u32, t: Real },
}

impl VertexSource {
    /// Interpolates per-control-point data at this vertex.
    pub fn interpolate<const N: usize>(&self, values: &[[Real; N]]) -> [Real; N] {
        match *self {
            VertexSource::Dof(i) => values[i as usize],
            VertexSource::Cut { from, to, t } => {
                let a = values[from as usize];
                let b = values[to as usize];
                std::array::from_fn(|k| a[k] + (b[k] - a[k]) * t)
            }
        }
    }
}

/// Clips linear tetrahedra against the zero level set of a scalar, keeping the non-negative side.
///
/// Output vertices are shared between output tetrahedra: input control
/// points are deduplicated by index and cut points by the (unordered) pair of
/// control points of the edge they lie on.
pub(crate) struct TetClipper<'a> {
    signs: &'a [Real],
    sources: Vec<VertexSource>,
    dof_vertices: HashMap<u32, u32>,
    cut_vertices: HashMap<SortedPair<u32>, u32>,
    tets: Vec<u32>,
}

impl<'a> TetClipper<'a> {
    /// A clipper keeping the regions where `signs[dof] >= 0`.
    pub fn new(signs: &'a [Real]) -> Self {
        Self {
            signs,
            sources: Vec::new(),
            dof_vertices: HashMap::default(),
            cut_vertices: HashMap::default(),
            tets: Vec::new(),
        }
    }

    fn dof_vertex(&mut self, dof: u32) -> u32 {
        match self.dof_vertices.entry(dof) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let id = self.sources.len() as u32;
                self.sources.push(VertexSource::Dof(dof));
                *e.insert(id)
            }
        }
    }

    /// The vertex where the edge from the kept control point `inside` to the
    /// removed control point `outside` crosses the surface.
    fn cut_vertex(&mut self, inside: u32, outside: u32) -> u32 {
        // The surface goes through `inside` itself.
        if self.signs[inside as usize] == 0.0 {
            return self.dof_vertex(inside);
        }

        let key = SortedPair::new(inside, outside);
        match self.cut_vertices.entry(key) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                // Always interpolate from the smallest index so both elements
                // sharing this edge produce the same point.
                let (from, to) = (*key.first(), *key.second());
                let (sf, st) = (self.signs[from as usize], self.signs[to as usize]);
                let t = sf / (sf - st);
                let id = self.sources.len() as u32;
                self.sources.push(VertexSource::Cut { from, to, t });
                *e.insert(id)
            }
        }
    }

    /// Appends `tet`, unless it is collapsed onto one of its faces.
    fn push_tet(&mut self, tet: [u32; 4]) {
        let collapsed = (0..4).any(|i| tet[i + 1..].contains(&tet[i]));
        if !collapsed {
            self.tets.extend_from_slice(&tet);
        }
    }

    /// Splits the wedge `(a0, a1, a2) - (b0, b1, b2)` into three tetrahedra.
    fn push_wedge(&mut self, [a0, a1, a2]: [u32; 3], [b0, b1, b2]: [u32; 3]) {
        self.push_tet([a0, a1, a2, b2]);
        self.push_tet([a0, a1, b1, b2]);
        self.push_tet([a0, b0, b1, b2]);
    }

    /// Clips the tetrahedron with control points `dofs` and appends the kept part.
    pub fn clip_tet(&mut self, dofs: [u32; 4]) {
        let mut inside = ArrayVec::<u32, 4>::new();
        let mut outside = ArrayVec::<u32, 4>::new();
        let mut any_positive = false;

        for dof in dofs {
            let s = self.signs[dof as usize];
            if s >= 0.0 {
                inside.push(dof);
                any_positive |= s > 0.0;
            } else {
                outside.push(dof);
            }
        }

        // The kept part is flat when it only touches the surface.
        if !any_positive {
            return;
        }

        match (inside.as_slice(), outside.as_slice()) {
            (&[i0, i1, i2, i3], _) => {
                let tet = [i0, i1, i2, i3].map(|i| self.dof_vertex(i));
                self.push_tet(tet);
            }
            (&[i0], &[o0, o1, o2]) => {
                let v = self.dof_vertex(i0);
                let c0 = self.cut_vertex(i0, o0);
                let c1 = self.cut_vertex(i0, o1);
                let c2 = self.cut_vertex(i0, o2);
                self.push_tet([v, c0, c1, c2]);
            }
            (&[i0, i1], &[o0, o1]) => {
                let v0 = self.dof_vertex(i0);
                let v1 = self.dof_vertex(i1);
                let c00 = self.cut_vertex(i0, o0);
                let c01 = self.cut_vertex(i0, o1);
                let c10 = self.cut_vertex(i1, o0);
                let c11 = self.cut_vertex(i1, o1);
                self.push_wedge([v0, c00, c01], [v1, c10, c11]);
            }
            (&[i0, i1, i2], &[o]) => {
                let v = [i0, i1, i2].map(|i| self.dof_vertex(i));
                let c = [i0, i1, i2].map(|i| self.cut_vertex(i, o));
                self.push_wedge(v, c);
            }
            _ => {}
        }
    }

    /// The vertex sources and the connectivity of the kept tetrahedra.
    pub fn finish(self) -> (Vec<VertexSource>, Vec<u32>) {
        (self.sources, self.tets)
    }
}
