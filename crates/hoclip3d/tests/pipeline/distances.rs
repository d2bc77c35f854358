use crate::unit_cube;
use hoclip3d::bounding_volume::Aabb;
use hoclip3d::data_model::DataSet;
use hoclip3d::filters::{Clip, ClipError, ClipPlane};
use hoclip3d::math::{Point, Real, Vector};
use hoclip3d::mesh::{
    builders, ElementType, GridFunction, HexP1, HexP2, HexPn, Mesh, MeshType, QuadPn, TetP1,
    TetP2, TetPn, UnstructuredMesh, UnsupportedMesh,
};
use std::sync::Arc;

fn check_layout<E: ElementType>(mesh: UnstructuredMesh<E>) {
    let coords = mesh.dof_data().clone();
    let domain = DataSet::with_mesh(Arc::new(mesh));
    let aabb = unit_cube();
    let planes = [
        ClipPlane::new(Point::new(0.5, 0.0, 0.0), Vector::x()),
        ClipPlane::new(Point::new(0.0, 0.5, 0.0), Vector::y()),
        ClipPlane::new(Point::new(0.0, 0.0, 0.5), Vector::z()),
    ];

    let mut clip = Clip::new();
    let check = |clip: &Clip| {
        let (field, _) = clip.make_distances(&domain, 0).unwrap();
        assert_eq!(field.dof_data().dof_count(), coords.dof_count());
        assert!(field.dof_data().same_topology_as(&coords));
        assert_eq!(field.element_name(), E::NAME);
    };

    clip.set_box_clip(aabb);
    check(&clip);
    clip.set_sphere_clip(Point::new(0.5, 0.5, 0.5), 0.5);
    check(&clip);
    clip.set_plane_clips(&planes[..1]).unwrap();
    check(&clip);
    clip.set_plane_clips(&planes[..2]).unwrap();
    check(&clip);
    clip.set_plane_clips(&planes).unwrap();
    check(&clip);
    clip.set_multi_plane(true);
    check(&clip);
}

#[test]
fn distances_follow_every_volumetric_layout() {
    let aabb = unit_cube();
    let corners = [
        Point::origin(),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];

    check_layout(builders::hex_grid::<HexP1>("hex-p1", &aabb, [3, 2, 1], 1).unwrap());
    check_layout(builders::hex_grid::<HexP2>("hex-p2", &aabb, [1, 2, 3], 2).unwrap());
    check_layout(builders::hex_grid::<HexPn>("hex-pn", &aabb, [2, 1, 1], 4).unwrap());
    check_layout(builders::tet_grid("tet-p1", &aabb, [2, 2, 2]).unwrap());
    check_layout(builders::single_tet::<TetP1>("tet-p1", corners, 1).unwrap());
    check_layout(builders::single_tet::<TetP2>("tet-p2", corners, 2).unwrap());
    check_layout(builders::single_tet::<TetPn>("tet-pn", corners, 5).unwrap());
}

fn distance_values(clip: &Clip, domain: &DataSet) -> (Vec<(Point<Real>, Real)>, Real) {
    let mesh = domain
        .mesh()
        .unwrap()
        .downcast_ref::<UnstructuredMesh<HexP2>>()
        .unwrap();
    let (field, clip_value) = clip.make_distances(domain, 0).unwrap();
    let pairs = mesh
        .dof_data()
        .values
        .iter()
        .zip(&field.dof_data().values)
        .map(|(pt, [v])| (Point::from(*pt), *v))
        .collect();
    (pairs, clip_value)
}

#[test]
fn box_distances() {
    let mesh = builders::hex_grid::<HexP2>("cube", &unit_cube(), [2, 2, 2], 2).unwrap();
    let domain = DataSet::with_mesh(Arc::new(mesh));
    let mut clip = Clip::new();
    clip.set_box_clip(Aabb::new(
        Point::new(0.25, 0.25, 0.25),
        Point::new(0.75, 0.75, 0.75),
    ));

    let (values, clip_value) = distance_values(&clip, &domain);
    assert_eq!(clip_value, 0.0);

    for (pt, v) in values {
        let inside = pt.iter().all(|c| *c > 0.25 && *c < 0.75);
        let on_face = pt.iter().all(|c| *c >= 0.25 && *c <= 0.75)
            && pt.iter().any(|c| *c == 0.25 || *c == 0.75);

        if inside {
            assert!(v < 0.0, "{} at {}", v, pt);
        } else if on_face {
            assert_relative_eq!(v, 0.0);
        } else {
            assert!(v > 0.0, "{} at {}", v, pt);
        }
    }
}

#[test]
fn sphere_distances() {
    let mesh = builders::hex_grid::<HexP2>("cube", &unit_cube(), [2, 2, 2], 2).unwrap();
    let domain = DataSet::with_mesh(Arc::new(mesh));
    let center = Point::new(0.5, 0.5, 0.5);
    let mut clip = Clip::new();
    clip.set_sphere_clip(center, 0.25);

    let (values, clip_value) = distance_values(&clip, &domain);
    assert_eq!(clip_value, 0.25);

    for (pt, v) in values {
        assert!(v >= 0.0);
        if pt == center {
            assert_eq!(v, 0.0);
        }
        assert_relative_eq!(v, (pt - center).norm());
    }
}

#[test]
fn plane_distances() {
    let mesh = builders::hex_grid::<HexP2>("cube", &unit_cube(), [2, 2, 2], 2).unwrap();
    let domain = DataSet::with_mesh(Arc::new(mesh));
    let mut clip = Clip::new();
    clip.set_plane_clip(Point::new(0.0, 0.0, 0.5), Vector::new(0.0, 0.0, -4.0));

    let (values, clip_value) = distance_values(&clip, &domain);
    assert_eq!(clip_value, 0.0);
    for (pt, v) in values {
        assert_relative_eq!(v, 0.5 - pt.z);
    }

    // A zero normal is kept as-is and yields a zero distance everywhere.
    clip.set_plane_clip(Point::origin(), Vector::zeros());
    let (values, _) = distance_values(&clip, &domain);
    assert!(values.iter().all(|(_, v)| *v == 0.0));
}

#[test]
fn surface_meshes_are_rejected() {
    let dofs = GridFunction::new(vec![[0.0; 3]; 4], vec![0, 1, 2, 3], 4).unwrap();
    let quad = UnstructuredMesh::<QuadPn>::new("quad", dofs, 1).unwrap();
    let domain = DataSet::with_mesh(Arc::new(quad));

    assert_eq!(
        Clip::new().make_distances(&domain, 0).unwrap_err(),
        ClipError::UnsupportedMesh(UnsupportedMesh {
            mesh_type: MeshType::QuadPn
        })
    );
    assert_eq!(domain.number_of_fields(), 0);
    assert_eq!(domain.mesh().unwrap().cells(), 1);
}
