use crate::{cube_domain, tet_mesh, vertices, volume};
use hoclip3d::data_model::Collection;
use hoclip3d::filters::{Clip, ClipPlane, DistanceFunction, SinglePlaneDistance};
use hoclip3d::math::{Point, Real, Vector};
use hoclip3d::mesh::{Field, HexP1, HexP2, Mesh};

const EPS: Real = 1.0e-5;

fn clip_both_ways(collection: &Collection, planes: &[ClipPlane]) -> (Collection, Collection) {
    let mut clip = Clip::new();
    clip.set_plane_clips(planes).unwrap();

    let fused = clip.execute(collection).unwrap();
    clip.set_multi_plane(true);
    let multi = clip.execute(collection).unwrap();
    (fused, multi)
}

fn assert_inside_all(collection: &Collection, planes: &[ClipPlane]) {
    for domain in collection.iter() {
        for pt in vertices(domain) {
            for plane in planes {
                let d = SinglePlaneDistance::new(plane).distance(&pt);
                assert!(d >= -EPS, "{} is outside of {:?} by {}", pt, plane, d);
            }
        }
    }
}

#[test]
fn aligned_planes_give_the_same_result() {
    let collection: Collection = [cube_domain::<HexP1>(0, 2, 1)].into_iter().collect();
    let planes = [
        ClipPlane::new(Point::new(0.5, 0.0, 0.0), Vector::x()),
        ClipPlane::new(Point::new(0.0, 0.5, 0.0), Vector::y()),
    ];

    let (fused, multi) = clip_both_ways(&collection, &planes);

    assert_relative_eq!(volume(fused.domain(0).unwrap()), 0.25, epsilon = EPS);
    assert_relative_eq!(volume(multi.domain(0).unwrap()), 0.25, epsilon = EPS);
    assert_inside_all(&fused, &planes);
    assert_inside_all(&multi, &planes);
}

#[test]
fn multi_pass_never_leaves_the_intersection() {
    let collection: Collection = [
        cube_domain::<HexP1>(0, 3, 1),
        cube_domain::<HexP2>(1, 2, 2),
    ]
    .into_iter()
    .collect();
    let planes = [
        ClipPlane::new(Point::new(0.3, 0.0, 0.0), Vector::new(1.0, 0.5, 0.0)),
        ClipPlane::new(Point::new(0.0, 0.7, 0.0), Vector::new(0.2, -1.0, 0.0)),
        ClipPlane::new(Point::new(0.0, 0.0, 0.45), Vector::new(0.0, 0.3, 1.0)),
    ];

    for n in 2..=3 {
        let (fused, multi) = clip_both_ways(&collection, &planes[..n]);
        assert_inside_all(&multi, &planes[..n]);
        assert_inside_all(&fused, &planes[..n]);

        for (f, m) in fused.iter().zip(multi.iter()) {
            // Planar cuts are exact, the fused one can only lose volume.
            let (vf, vm) = (volume(f), volume(m));
            assert!(vm > 0.0);
            assert!(vf <= vm + EPS, "fused: {}, multi-pass: {}", vf, vm);
        }
    }
}

#[test]
fn fields_are_carried_across_passes() {
    let collection: Collection = [cube_domain::<HexP2>(3, 2, 2)].into_iter().collect();
    let planes = [
        ClipPlane::new(Point::new(0.2, 0.0, 0.0), Vector::x()),
        ClipPlane::new(Point::new(0.0, 0.8, 0.0), -Vector::y()),
        ClipPlane::new(Point::new(0.0, 0.0, 0.4), Vector::new(1.0, 1.0, 1.0)),
    ];

    let (_, multi) = clip_both_ways(&collection, &planes);
    let domain = multi.domain(0).unwrap();
    let mesh = tet_mesh(domain);

    assert_eq!(domain.domain_id(), 3);
    assert_eq!(mesh.name(), "cube");
    assert!(mesh.cells() > 0);

    for (name, axis) in [("x", 0), ("y", 1)] {
        let field = domain.field(name).unwrap();
        assert_eq!(field.mesh_name(), "cube");
        assert!(field.dof_data().same_topology_as(mesh.dof_data()));

        for (pt, [v]) in mesh.dof_data().values.iter().zip(&field.dof_data().values) {
            assert_relative_eq!(*v, pt[axis], epsilon = EPS);
        }
    }
}
