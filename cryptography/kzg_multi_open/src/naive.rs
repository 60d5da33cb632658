use crate::opening_key::OpeningKey;
use bls12_381::{multi_pairings, G1Point, G1Projective, G2Point, G2Prepared, Scalar};
use polynomial::poly_coeff::{lagrange_interpolate, poly_div, poly_eval, poly_sub, vanishing_poly};

/// This module computes and verifies multi-point opening proofs for a
/// committed polynomial. It is general, in that the points we open at do
/// not need to have any special structure.
///
/// This generalized scheme is described in [BDFG21](https://eprint.iacr.org/2020/081.pdf).
/// FK20's toeplitz-matrix machinery, which exploits coset-of-roots-of-unity
/// structure to open orders of magnitude faster, is out of scope here; this
/// is the only, production prover/verifier path.
///
/// Naively computes an opening proof that attests to the evaluation of
/// `polynomial` at `input_points`.
///
/// Note: This method returns both the proof and the output points, unlike
/// the convention followed elsewhere, since output points fall out of
/// interpolating `I(X)` almost for free.
pub fn compute_multi_opening(
    opening_key: &OpeningKey,
    polynomial: &[Scalar],
    input_points: &[Scalar],
) -> (G1Point, Vec<Scalar>) {
    compute_multi_opening_naive(opening_key, polynomial, input_points)
}

/// Verifies a multi-point opening proof produced by [`compute_multi_opening`].
pub fn verify_multi_opening(
    opening_key: &OpeningKey,
    commitment: G1Point,
    quotient_commitment: G1Point,
    input_points: &[Scalar],
    output_points: &[Scalar],
) -> bool {
    verify_multi_opening_naive(
        opening_key,
        commitment,
        quotient_commitment,
        input_points,
        output_points,
    )
}

/// Computes a multi-point opening proof using the general formula.
///
/// This is done by committing to the following quotient polynomial:
///     Q(X) = (f(X) - I(X)) / Z(X)
/// Where:
///     - I(X) is the degree `k-1` polynomial that agrees with f(x) at all `k` points
///     - Z(X) is the degree `k` polynomial that evaluates to zero on all `k` points
fn compute_multi_opening_naive(
    opening_key: &OpeningKey,
    polynomial: &[Scalar],
    points: &[Scalar],
) -> (G1Point, Vec<Scalar>) {
    let evaluations: Vec<_> = points
        .iter()
        .map(|point| poly_eval(polynomial, point))
        .collect();

    let coordinates: Vec<_> = points
        .iter()
        .zip(evaluations.iter())
        .map(|(p, e)| (*p, *e))
        .collect();
    let i_x = lagrange_interpolate(&coordinates).expect("lagrange interpolation failed");

    // Check that the i_x polynomial is correct, ie that it agrees with f(z_i) at every point.
    for (point, evaluation) in points.iter().zip(evaluations.iter()) {
        debug_assert_eq!(poly_eval(&i_x, point), *evaluation);
    }

    let poly_shifted = poly_sub(polynomial.to_vec(), i_x);
    let z_x = vanishing_poly(points);
    let quotient_poly = poly_div(&poly_shifted, &z_x);

    (opening_key.commit_g1(&quotient_poly).into(), evaluations)
}

/// Verifies a multi-opening proof using the general formula.
///
/// This is done by checking if the following equation holds:
///     Q(x) Z(x) = f(X) - I(X)
/// Where:
///     f(X) is the polynomial that we want to verify opens at `k` points to `k` values
///     Q(X) is the quotient polynomial computed by the prover
///     I(X) is the degree k-1 polynomial that evaluates to `ys` at all `zs` points
///     Z(X) is the polynomial that evaluates to zero on all `k` points
///
/// The verifier receives the commitments to Q(X) and f(X), so they check the equation
/// holds by using the following pairing equation:
///     e([Q(X)]_1, [Z(X)]_2) == e([f(X)]_1 - [I(X)]_1, [1]_2)
fn verify_multi_opening_naive(
    opening_key: &OpeningKey,
    commitment: G1Point,
    proof: G1Point,
    input_points: &[Scalar],
    output_points: &[Scalar],
) -> bool {
    let coordinates: Vec<_> = input_points
        .iter()
        .zip(output_points.iter())
        .map(|(p, e)| (*p, *e))
        .collect();
    let Some(i_x) = lagrange_interpolate(&coordinates) else {
        return false;
    };

    let vanishing_poly = vanishing_poly(input_points);
    let comm_vanishing_poly: G2Point = opening_key.commit_g2(&vanishing_poly).into();

    let comm_i_x = opening_key.commit_g1(&i_x);
    let comm_minus_i_x: G1Point = (G1Projective::from(commitment) - comm_i_x).into();
    multi_pairings(&[
        (&proof, &G2Prepared::from(comm_vanishing_poly)),
        (&comm_minus_i_x, &G2Prepared::from(-opening_key.g2_gen())),
    ])
}
