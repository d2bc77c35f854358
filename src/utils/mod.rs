//! Various unsorted geometrical and logical operators.

pub use self::dof_map::map_dofs;
pub use self::normalize::normalize_or_keep;
pub use self::sorted_pair::SortedPair;
pub use self::tetrahedron::tetrahedron_volume;

mod dof_map;
pub mod hashmap;
mod normalize;
mod sorted_pair;
mod tetrahedron;
