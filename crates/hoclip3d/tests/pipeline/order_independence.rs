use hoclip3d::filters::{ClipPlane, DistanceFunction, MultiPlaneDistance, SphereDistance};
use hoclip3d::math::{Point, Real, Vector};
use hoclip3d::utils::map_dofs;

fn random_points(seed: u64, n: usize) -> Vec<[Real; 3]> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..n)
        .map(|_| {
            [
                rng.rand_float() as Real * 10.0 - 5.0,
                rng.rand_float() as Real * 10.0 - 5.0,
                rng.rand_float() as Real * 10.0 - 5.0,
            ]
        })
        .collect()
}

fn check<D: DistanceFunction>(distance: &D, points: &[[Real; 3]]) {
    let mut mapped = vec![0.0; points.len()];
    map_dofs(points, &mut mapped, |pt| distance.distance(&Point::from(*pt)));

    let sequential: Vec<_> = points
        .iter()
        .map(|pt| distance.distance(&Point::from(*pt)))
        .collect();
    assert_eq!(mapped, sequential);
}

#[test]
fn mapped_distances_match_a_sequential_evaluation() {
    let points = random_points(1234, 10_000);
    let planes = [
        ClipPlane::new(Point::new(1.0, 0.0, 0.0), Vector::new(1.0, 2.0, 3.0)),
        ClipPlane::new(Point::new(0.0, -1.0, 0.0), Vector::new(-3.0, 1.0, 0.5)),
    ];

    check(
        &SphereDistance {
            center: Point::new(0.5, -0.5, 1.0),
            radius: 2.0,
        },
        &points,
    );
    check(&MultiPlaneDistance::new(&planes).unwrap(), &points);
}
