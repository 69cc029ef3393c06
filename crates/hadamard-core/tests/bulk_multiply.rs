//! End-to-end public API test at the harness's reference scale:
//! 1,048,576-element buffers filled with uniform values in [0, 1).

use hadamard_core::{multiply, NumericBuffer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const REFERENCE_LEN: usize = 1 << 20;

fn uniform(seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..REFERENCE_LEN).map(|_| rng.random_range(0.0..1.0)).collect()
}

#[test]
fn million_element_product_stays_in_unit_interval() {
    let a = uniform(1);
    let b = uniform(2);

    let left = NumericBuffer::from_slice(&a).unwrap();
    let right = NumericBuffer::from_slice(&b).unwrap();
    let product = multiply(&left, &right).unwrap();

    assert_eq!(product.len(), REFERENCE_LEN);
    // The product of two values in [0, 1) stays in [0, 1), including after
    // rounding.
    for (i, &v) in product.as_slice().iter().enumerate() {
        assert!((0.0..1.0).contains(&v), "element {i} out of range: {v}");
        assert_eq!(v.to_bits(), (a[i] * b[i]).to_bits());
    }
}

#[test]
fn bulk_construction_leaves_source_usable() {
    let mut source = uniform(3);
    let buffer = NumericBuffer::from_slice(&source).unwrap();
    let before = source[1000];

    source[1000] = -1.0;
    assert_eq!(buffer.get(1000).unwrap(), before);
}
