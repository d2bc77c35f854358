use crate::{cube_domain, tet_mesh, unit_cube, vertices, volume};
use hoclip3d::data_model::{Collection, DataSet};
use hoclip3d::filters::{Clip, ClipError, CLIP_FIELD_NAME};
use hoclip3d::math::{Point, Real, Vector};
use hoclip3d::mesh::{
    builders, GridFunction, HexP1, HexP2, HexPn, Mesh, MeshType, QuadPn, UnstructuredMesh,
    UnsupportedMesh,
};
use hoclip3d::utils::tetrahedron_volume;
use std::sync::Arc;

#[test]
fn unit_cube_clipped_by_a_sphere() {
    let mesh = builders::hex_grid::<HexP1>("cube", &unit_cube(), [1, 1, 1], 1).unwrap();
    let collection: Collection = [DataSet::with_mesh(Arc::new(mesh))].into_iter().collect();

    let mut clip = Clip::new();
    clip.set_sphere_clip(Point::new(0.5, 0.5, 0.5), 0.6);
    let output = clip.execute(&collection).unwrap();

    assert_eq!(output.local_size(), 1);
    let domain = output.domain(0).unwrap();
    // Every corner lies outside of the sphere, so nothing is kept.
    let input_cells = collection.domain(0).unwrap().mesh().unwrap().cells();
    assert!(tet_mesh(domain).cells() < input_cells);
    assert!(volume(domain) < unit_cube().volume());
    assert!(!domain.has_field(CLIP_FIELD_NAME));
}

/// Asserts that no two output vertices coincide and that no output cell is flat.
fn assert_well_formed(domain: &DataSet) {
    let pts = vertices(domain);
    for (i, a) in pts.iter().enumerate() {
        for b in &pts[i + 1..] {
            assert!((a - b).norm() > 1.0e-6, "{} and {} coincide", a, b);
        }
    }

    let mesh = tet_mesh(domain);
    for e in 0..mesh.cells() {
        let c: Vec<_> = mesh.element_corners(e).collect();
        assert!(tetrahedron_volume(&c[0], &c[1], &c[2], &c[3]) > 1.0e-7);
    }
}

fn unit_hex() -> Collection {
    let mesh = builders::hex_grid::<HexP1>("cube", &unit_cube(), [1, 1, 1], 1).unwrap();
    [DataSet::with_mesh(Arc::new(mesh))].into_iter().collect()
}

#[test]
fn points_on_the_sphere_are_kept() {
    let mut clip = Clip::new();
    clip.set_sphere_clip(Point::origin(), 1.0);
    let output = clip.execute(&unit_hex()).unwrap();
    let domain = output.domain(0).unwrap();

    let pts = vertices(domain);
    for corner in [Vector::x(), Vector::y(), Vector::z()] {
        let count = pts.iter().filter(|pt| pt.coords == corner).count();
        assert_eq!(count, 1, "{:?} kept {} times", corner, count);
    }
    assert!(pts.contains(&Point::origin()));
    assert_well_formed(domain);
}

#[test]
fn plane_through_mesh_corners() {
    // The plane `x + y = 1` goes through four corners of the cube.
    let mut clip = Clip::new();
    clip.set_plane_clip(Point::new(1.0, 0.0, 0.0), Vector::new(1.0, 1.0, 0.0));
    let output = clip.execute(&unit_hex()).unwrap();
    let domain = output.domain(0).unwrap();

    assert_relative_eq!(volume(domain), 0.5, epsilon = 1.0e-5);
    assert_well_formed(domain);
    for pt in vertices(domain) {
        assert!(pt.x + pt.y >= 1.0 - 1.0e-5);
    }
}

#[test]
fn refined_cube_clipped_by_a_sphere() {
    let center = Point::new(0.5, 0.5, 0.5);
    let radius: Real = 0.4;
    let collection: Collection = [cube_domain::<HexP2>(0, 8, 2)].into_iter().collect();

    let mut clip = Clip::new();
    clip.set_sphere_clip(center, radius);
    let output = clip.execute(&collection).unwrap();
    let domain = output.domain(0).unwrap();

    let vol = volume(domain);
    let ball = 4.0 / 3.0 * std::f64::consts::PI as Real * radius * radius * radius;
    assert!(vol > 0.5 * ball && vol <= ball + 1.0e-5, "{} vs {}", vol, ball);
    for pt in vertices(domain) {
        assert!((pt - center).norm() <= radius + 1.0e-5);
    }
    assert!(!domain.has_field(CLIP_FIELD_NAME));
    assert_eq!(domain.number_of_fields(), 2);
}

#[test]
fn domain_order_and_ids_are_preserved() {
    let collection: Collection = [
        cube_domain::<HexP1>(5, 2, 1),
        cube_domain::<HexP2>(2, 1, 2),
        cube_domain::<HexPn>(9, 1, 3),
    ]
    .into_iter()
    .collect();

    let mut clip = Clip::new();
    clip.set_plane_clip(Point::new(0.3, 0.0, 0.0), Vector::x());
    let output = clip.execute(&collection).unwrap();

    let ids: Vec<_> = output.iter().map(|d| d.domain_id()).collect();
    assert_eq!(ids, [5, 2, 9]);
    for domain in output.iter() {
        assert_relative_eq!(volume(domain), 0.7, epsilon = 1.0e-5);
        assert_eq!(domain.mesh().unwrap().mesh_type(), MeshType::TetP1);
    }
}

#[test]
fn unsupported_meshes_abort_the_pipeline() {
    let dofs = GridFunction::new(vec![[0.0; 3]; 4], vec![0, 1, 2, 3], 4).unwrap();
    let quad = UnstructuredMesh::<QuadPn>::new("quad", dofs, 1).unwrap();
    let mut surface = DataSet::with_mesh(Arc::new(quad));
    surface.set_domain_id(1);

    let collection: Collection = [cube_domain::<HexP1>(0, 1, 1), surface]
        .into_iter()
        .collect();

    assert_eq!(
        Clip::new().execute(&collection).unwrap_err(),
        ClipError::UnsupportedMesh(UnsupportedMesh {
            mesh_type: MeshType::QuadPn
        })
    );
    assert_eq!(collection.local_size(), 2);
    assert_eq!(collection.domain(1).unwrap().number_of_fields(), 0);
}
