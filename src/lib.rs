/*!
hoclip
========

**hoclip** clips unstructured, high-order 3D meshes against implicit
shapes (an axis-aligned box, a sphere, or one to three planes) for
scientific visualization.

The entry point is [`filters::Clip`]: configure a clip shape, then run it on a
[`data_model::Collection`] of domains. Each domain is clipped in one or more
passes; every pass evaluates a signed-distance field over the mesh control
points and hands it to an [`filters::ElementClipper`] that cuts the elements.

```
# #[cfg(feature = "f32")] {
use std::sync::Arc;
use hoclip3d::bounding_volume::Aabb;
use hoclip3d::data_model::{Collection, DataSet};
use hoclip3d::filters::Clip;
use hoclip3d::math::{Point, Vector};
use hoclip3d::mesh::{builders, HexP1};

let cube = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
let mesh = builders::hex_grid::<HexP1>("mesh", &cube, [2, 2, 2], 1).unwrap();
let collection: Collection = [DataSet::with_mesh(Arc::new(mesh))].into_iter().collect();

let mut clip = Clip::new();
clip.set_plane_clip(Point::new(0.5, 0.0, 0.0), Vector::x());
let clipped = clip.execute(&collection).unwrap();
assert_eq!(clipped.local_size(), 1);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod data_model;
#[cfg(feature = "debug-dump")]
pub mod debug;
pub mod filters;
pub mod math;
pub mod mesh;
pub mod utils;
