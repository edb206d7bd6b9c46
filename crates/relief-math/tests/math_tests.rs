//! Integration tests for relief-math.

use relief_math::Kernel;

// ─── Kernel Tests ─────────────────────────────────────────────

#[test]
fn box_kernel_is_uniform() {
    let k = Kernel::box_filter(2);
    assert_eq!(k.size(), 5);
    assert_eq!(k.weights().len(), 25);
    assert!(k.weights().iter().all(|&w| w == 1.0));
}

#[test]
fn gaussian_centre_is_one() {
    let k = Kernel::gaussian(3, 5.0);
    assert_eq!(k.weight(0, 0), 1.0);
}

#[test]
fn gaussian_is_symmetric() {
    let k = Kernel::gaussian(2, 3.0);
    assert_eq!(k.weight(1, 2), k.weight(-1, -2));
    assert_eq!(k.weight(2, 1), k.weight(1, 2));
}

#[test]
fn gaussian_decays_with_distance() {
    let k = Kernel::gaussian(2, 3.0);
    assert!(k.weight(1, 0) < k.weight(0, 0));
    assert!(k.weight(2, 2) < k.weight(1, 1));
    let expected = (-8.0f32 / 3.0).exp();
    assert!((k.weight(2, 2) - expected).abs() < 1e-7);
}
