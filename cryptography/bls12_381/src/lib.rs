pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group, so other crates do not need to directly import(and independently version) them
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// Precomputed G2 point for efficient pairing computations.
///
/// This representation allows reusing expensive Miller loop setup across multiple pairings.
pub type G2Prepared = blstrs::G2Prepared;

/// Scalar field element for the BLS12-381 curve.
///
/// Used as exponents in scalar multiplication and other finite field operations.
pub type Scalar = blstrs::Scalar;

/// Checks whether the product of pairings over the given G1 x G2 pairs equals the identity.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    use group::Group;
    use pairing::{MillerLoopResult, MultiMillerLoop};

    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts Projective points to normalized points efficiently.
///
// Note: This efficient variation is needed here and not for G2 because it is called
// multiple times for MSM pre-computations.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    use group::{prime::PrimeCurveAffine, Group};

    if projective_points.is_empty() {
        return Vec::new();
    }

    // Track which points are identity and create a filtered vec without them
    //
    // This is because blst will convert all points into the identity point
    // if even one of them is the identity point.
    let mut identity_positions = Vec::new();
    let mut non_identity_points = Vec::new();

    for (idx, point) in projective_points.iter().enumerate() {
        if point.is_identity().into() {
            identity_positions.push(idx);
        } else {
            non_identity_points.push(*point);
        }
    }

    // If all points are identity, return a vector of identity points
    if non_identity_points.is_empty() {
        return vec![G1Point::identity(); projective_points.len()];
    }

    // Convert non-identity points to BLST representation and normalize
    let points = unsafe {
        std::slice::from_raw_parts(
            non_identity_points.as_ptr().cast::<blst::blst_p1>(),
            non_identity_points.len(),
        )
    };

    let normalized = blst::p1_affines::from(points);

    // Convert normalized points back to G1Points
    let mut result: Vec<_> = normalized
        .as_slice()
        .iter()
        .map(|p| G1Point::from_raw_unchecked(p.x.into(), p.y.into(), false))
        .collect();

    // Reinsert identity points at their original positions
    for pos in identity_positions {
        result.insert(pos, G1Point::identity());
    }

    result
}

/// Efficiently batch-normalizes a slice of G2 projective points to their affine representation.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

/// Generic utility to batch-normalize projective points for any curve implementing `PrimeCurveAffine`.
pub fn batch_normalize_points<T: group::prime::PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: group::Curve<AffineRepr = T>,
{
    use group::Curve;

    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}

/// Reduces bytes to be a value less than the scalar modulus.
#[allow(clippy::borrow_as_ptr)]
pub fn reduce_bytes_to_scalar_bias(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        // Convert byte array into a scalar
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_bendian(&mut s, bytes.as_ptr());
        // Convert scalar into a `blst_fr` reducing the value along the way
        blst::blst_fr_from_scalar(&mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}
