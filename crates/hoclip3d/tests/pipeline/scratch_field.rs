use crate::cube_domain;
use hoclip3d::bounding_volume::Aabb;
use hoclip3d::data_model::{Collection, DataSet};
use hoclip3d::filters::{
    Clip, ClipError, ClipFieldError, ClipFieldParams, ClipPlane, ElementClipper, CLIP_FIELD_NAME,
};
use hoclip3d::math::{Point, Vector};
use hoclip3d::mesh::{HexP1, HexP2};
use std::sync::Arc;

fn configurations() -> Vec<Clip> {
    let planes = [
        ClipPlane::new(Point::new(0.4, 0.0, 0.0), Vector::new(1.0, 0.2, 0.0)),
        ClipPlane::new(Point::new(0.0, 0.6, 0.0), Vector::new(0.0, -1.0, 0.1)),
        ClipPlane::new(Point::new(0.0, 0.0, 0.3), Vector::z()),
    ];
    let mut configs = vec![];

    for invert in [false, true] {
        let mut clip = Clip::new();
        clip.set_invert_clip(invert);
        configs.push(clip.clone());

        clip.set_box_clip(Aabb::new(Point::new(0.1, 0.2, 0.3), Point::new(0.7, 0.8, 0.9)));
        configs.push(clip.clone());

        clip.set_sphere_clip(Point::new(0.2, 0.5, 0.5), 0.6);
        configs.push(clip.clone());

        for n in 1..=3 {
            clip.set_plane_clips(&planes[..n]).unwrap();
            clip.set_multi_plane(false);
            configs.push(clip.clone());
            clip.set_multi_plane(true);
            configs.push(clip.clone());
        }
    }

    configs
}

#[test]
fn scratch_field_never_reaches_the_output() {
    let collection: Collection = [
        cube_domain::<HexP1>(0, 3, 1),
        cube_domain::<HexP2>(1, 2, 2),
    ]
    .into_iter()
    .collect();

    for clip in configurations() {
        let output = clip.execute(&collection).unwrap();
        assert_eq!(output.local_size(), 2);

        for domain in output.iter() {
            assert!(!domain.has_field(CLIP_FIELD_NAME), "{:?}", clip.shape());
            assert_eq!(
                domain.field_names().collect::<Vec<_>>(),
                ["x", "y"],
                "{:?}",
                clip.shape()
            );
        }
    }

    // The input is never modified.
    for domain in collection.iter() {
        assert_eq!(domain.field_names().collect::<Vec<_>>(), ["x", "y"]);
    }
}

struct Failing;

impl ElementClipper for Failing {
    fn clip(&self, input: &DataSet, _: &ClipFieldParams) -> Result<DataSet, ClipFieldError> {
        assert!(input.has_field(CLIP_FIELD_NAME));
        Err(ClipFieldError::MissingMesh)
    }
}

#[test]
fn clipper_errors_abort_the_pipeline() {
    let domain = cube_domain::<HexP1>(0, 1, 1);
    let mesh = domain.mesh().unwrap().clone();
    let collection: Collection = [domain].into_iter().collect();

    let clip = Clip::with_clipper(Failing);
    assert_eq!(
        clip.execute(&collection).unwrap_err(),
        ClipError::ClipField(ClipFieldError::MissingMesh)
    );

    let domain = collection.domain(0).unwrap();
    assert!(!domain.has_field(CLIP_FIELD_NAME));
    assert_eq!(domain.number_of_fields(), 2);
    assert!(Arc::ptr_eq(domain.mesh().unwrap(), &mesh));
}
