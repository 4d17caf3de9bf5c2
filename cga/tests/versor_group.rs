use cga::{Axis, Conformal, Plane, PoseVector, Versor, VersorAlgebra};

/// Small deterministic generator so the sampled motions are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn sample_versor(rng: &mut Lcg) -> Versor {
    let planes = [Plane::XY, Plane::YZ, Plane::ZX];
    let axes = [Axis::X, Axis::Y, Axis::Z];
    let mut v = Versor::identity();
    for i in 0..4 {
        let step = if rng.next_f64() < 0.5 {
            Versor::rotor(rng.range(-3.0, 3.0), planes[i % 3])
        } else {
            Versor::translator(rng.range(-2.0, 2.0), axes[(i + 1) % 3])
        };
        v = v.compose(&step);
    }
    v
}

#[test]
fn test_composition_is_associative() {
    let mut rng = Lcg(7);
    for _ in 0..50 {
        let a = sample_versor(&mut rng);
        let b = sample_versor(&mut rng);
        let c = sample_versor(&mut rng);
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        assert!(left.approx_eq(&right, 1e-10), "{} vs {}", left, right);
    }
}

#[test]
fn test_composition_is_not_commutative() {
    let r = Versor::rotor(1.0, Plane::XY);
    let t = Versor::translator(1.0, Axis::X);
    assert!(!r.compose(&t).same_motion(&t.compose(&r), 1e-6));
}

#[test]
fn test_inverse_cancels_sampled_versors() {
    let mut rng = Lcg(42);
    for _ in 0..50 {
        let v = sample_versor(&mut rng);
        assert!(v.compose(&v.inverse()).approx_eq(&Versor::identity(), 1e-10));
        assert!(v.inverse().compose(&v).approx_eq(&Versor::identity(), 1e-10));
    }
}

#[test]
fn test_pose_vector_survives_json() {
    let algebra = Conformal;
    let pose = algebra.compose(&algebra.rotor(0.75, Plane::XY), &algebra.translator(2.0, Axis::X));
    let report = algebra.to_pose_vector(&pose);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"rz\""));
    let back: PoseVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let rebuilt = Versor::from_pose_vector(&back);
    assert!(rebuilt.same_motion(&pose, 1e-12));
}
