use cga_kinematics::{ChainConfig, InverseSolver, KinematicChain, PoseVector};
use std::f64::consts::PI;

/// End-effector pose of the three unit links at joints [1, 1, 1].
fn expected_pose() -> PoseVector {
    PoseVector::from_array([-0.8658370269, 1.8918884196, 0.0, 0.0, 0.0, 3.0])
}

fn angle_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(2.0 * PI);
    d.min(2.0 * PI - d)
}

#[test]
fn test_forward_three_unit_links() {
    let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
    let pose = chain.forward(&[1.0, 1.0, 1.0]).unwrap().to_pose_vector();

    println!("FK [1, 1, 1]: {:?}", pose);

    let expected = expected_pose();
    for (got, want) in pose.as_array().iter().zip(expected.as_array().iter()) {
        assert!((got - want).abs() < 1e-6, "{:?} != {:?}", pose, expected);
    }
}

#[test]
fn test_inverse_three_unit_links() {
    let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
    let goal = chain.forward(&[1.0, 1.0, 1.0]).unwrap();

    let solution = InverseSolver::new(&chain).inverse(&goal).unwrap();
    println!("IK result: {:?}", solution);
    assert!(solution.residual < 1e-8);

    // Elbow-up and elbow-down reach the same pose
    let branches = [[1.0, 1.0, 1.0], [2.0, -1.0, 2.0]];
    let matched = branches.iter().any(|branch| {
        branch
            .iter()
            .zip(solution.joints.iter())
            .all(|(want, got)| angle_difference(*want, *got) < 1e-4)
    });
    assert!(matched, "joints {:?} match neither branch", solution.joints);

    let reached = chain.forward(&solution.joints).unwrap();
    assert!(reached.to_pose_vector().max_difference(&goal.to_pose_vector()) < 1e-4);
}

#[test]
fn test_other_branch_reaches_same_pose() {
    let chain = KinematicChain::new(ChainConfig::planar_three_link()).unwrap();
    let a = chain.forward(&[1.0, 1.0, 1.0]).unwrap();
    let b = chain.forward(&[2.0, -1.0, 2.0]).unwrap();
    assert!(a.same_motion(&b, 1e-12));
}

#[test]
fn test_sample_request_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/planar_three_link.json");
    let request = cga_kinematics::Request::from_reader(std::fs::File::open(path).unwrap()).unwrap();
    let response = cga_kinematics::run_request(&request).unwrap();

    let forward = response.forward.unwrap();
    assert!(forward.pose.max_difference(&expected_pose()) < 1e-6);

    match response.inverse.unwrap() {
        cga_kinematics::request::InverseReport::Solved { reached, residual, .. } => {
            assert!(residual < 1e-8);
            assert!(reached.max_difference(&expected_pose()) < 1e-4);
        }
        other => panic!("expected a solution, got {:?}", other),
    }
}
