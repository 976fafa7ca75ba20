use wireview_core::{
    Edge, Error, ProjectedPoint, Projection, RotationState, Vertex3D, WireframeProjector,
};

const EPS: f32 = 1e-5;

fn close(a: ProjectedPoint, b: ProjectedPoint) -> bool {
    (a - b).norm() < EPS
}

fn assert_points_close(actual: &Projection, expected: &[ProjectedPoint]) {
    assert_eq!(actual.points.len(), expected.len());
    for (i, (a, e)) in actual.points.iter().zip(expected).enumerate() {
        assert!(close(*a, *e), "point {i}: got {a:?}, expected {e:?}");
    }
}

#[test]
fn valid_edges_construct() {
    let vertices = vec![
        Vertex3D::new(0.0, 0.0, 0.0),
        Vertex3D::new(1.0, 0.0, 0.0),
        Vertex3D::new(0.0, 1.0, 0.0),
    ];
    let edges = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
    let projector = WireframeProjector::new(vertices, edges.clone()).unwrap();
    assert_eq!(projector.edges(), edges.as_slice());
    assert_eq!(projector.vertices().len(), 3);
}

#[test]
fn out_of_range_edge_is_a_configuration_error() {
    let vertices = vec![Vertex3D::origin(); 4];

    for bad in [Edge::new(4, 0), Edge::new(0, 4), Edge::new(usize::MAX, 1)] {
        let result = WireframeProjector::new(vertices.clone(), vec![Edge::new(0, 1), bad]);
        assert!(
            matches!(result, Err(Error::EdgeOutOfRange { edge: 1, vertex_count: 4, .. })),
            "edge {bad:?} should be rejected"
        );
    }
}

#[test]
fn projection_is_deterministic() {
    let projector = WireframeProjector::cube();
    let rotation = RotationState::from_degrees(33.0, 127.0, 291.0);

    let first = projector.project(rotation, 80.0);
    let second = projector.project(rotation, 80.0);

    assert_eq!(first, second);
    for (a, b) in first.points.iter().zip(&second.points) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn identity_rotation_flips_y() {
    let projector = WireframeProjector::cube();
    let projection = projector.project(RotationState::zero(), 1.0);

    let expected: Vec<_> = projector
        .vertices()
        .iter()
        .map(|v| ProjectedPoint::new(v.x, -v.y))
        .collect();
    assert_points_close(&projection, &expected);
}

#[test]
fn x_rotation_alone_matches_manual_rotation() {
    let projector = WireframeProjector::cube();
    let angle = std::f32::consts::FRAC_PI_2;
    let projection = projector.project(RotationState::new(angle, 0.0, 0.0), 1.0);

    // Rotating about X by 90 degrees: y' = y cos - z sin = -z
    let expected: Vec<_> = projector
        .vertices()
        .iter()
        .map(|v| {
            let y = v.y * angle.cos() - v.z * angle.sin();
            ProjectedPoint::new(v.x, -y)
        })
        .collect();
    assert_points_close(&projection, &expected);
}

#[test]
fn rotations_compose_x_then_y_then_z() {
    let projector = WireframeProjector::new(vec![Vertex3D::new(1.0, 0.0, 0.0)], Vec::new()).unwrap();

    // Rx(90) * Ry(90) takes +X to -Z, then to +Y
    let projection = projector.project(RotationState::from_degrees(90.0, 90.0, 0.0), 1.0);
    assert_points_close(&projection, &[ProjectedPoint::new(0.0, -1.0)]);

    // Ry(90) * Rz(90) takes +X to +Y, which Ry leaves alone
    let projection = projector.project(RotationState::from_degrees(0.0, 90.0, 90.0), 1.0);
    assert_points_close(&projection, &[ProjectedPoint::new(0.0, -1.0)]);

    // Rx(90) * Rz(90) takes +X to +Y, then to +Z which projects to the origin
    let projection = projector.project(RotationState::from_degrees(90.0, 0.0, 90.0), 1.0);
    assert_points_close(&projection, &[ProjectedPoint::new(0.0, 0.0)]);
}

#[test]
fn full_turns_are_accepted() {
    let projector = WireframeProjector::cube();
    let base = projector.project(RotationState::from_degrees(10.0, 20.0, 30.0), 1.0);
    let wrapped = projector.project(RotationState::from_degrees(370.0, -340.0, 750.0), 1.0);
    for (a, b) in base.points.iter().zip(&wrapped.points) {
        assert!((a - b).norm() < 1e-4);
    }
}

#[test]
fn scale_is_linear() {
    let projector = WireframeProjector::cube();
    let rotation = RotationState::from_degrees(15.0, 40.0, 75.0);

    for k in [0.5_f32, 2.0, 7.25] {
        let base = projector.project(rotation, 10.0);
        let scaled = projector.project(rotation, 10.0 * k);
        for (b, s) in base.points.iter().zip(&scaled.points) {
            assert!((s.x - b.x * k).abs() < 1e-3);
            assert!((s.y - b.y * k).abs() < 1e-3);
        }
    }
}

#[test]
fn edges_are_preserved_in_order() {
    let projector = WireframeProjector::cube();
    for degrees in [0.0_f32, 45.0, 90.0, 200.0] {
        let projection = projector.project(RotationState::from_degrees(degrees, degrees, degrees), 3.0);
        assert_eq!(projection.edges, projector.edges());
    }
}

#[test]
fn cube_at_scale_80() {
    let projector = WireframeProjector::cube();
    let projection = projector.project(RotationState::zero(), 80.0);

    let expected: Vec<_> = projector
        .vertices()
        .iter()
        .map(|v| ProjectedPoint::new(v.x * 80.0, -v.y * 80.0))
        .collect();
    assert_points_close(&projection, &expected);

    // Front and back faces overlap exactly: a 160 x 160 square
    let bounds = projection.bounds().unwrap();
    assert!((bounds.width() - 160.0).abs() < EPS);
    assert!((bounds.height() - 160.0).abs() < EPS);

    let pairs: Vec<_> = projection.edges.iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(
        pairs,
        vec![
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ]
    );
}
