pub mod cosets;
pub mod naive;
pub mod opening_key;

pub use cosets::{coset_for_cell, recover_evaluations_in_domain_order};
pub use opening_key::OpeningKey;

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::opening_key::OpeningKey;
    use bls12_381::ff::Field;
    use bls12_381::group::Group;
    use bls12_381::{g1_batch_normalize, g2_batch_normalize, G1Projective, G2Projective, Scalar};

    /// Builds an `OpeningKey` from an insecure, ephemeral trusted setup for use in tests.
    ///
    /// This must never be used outside of tests: the "toxic waste" scalar is a well-known
    /// constant, so anyone can forge openings against the resulting key.
    pub(crate) fn insecure_opening_key(
        num_coefficients_in_polynomial: usize,
        coset_size: usize,
    ) -> OpeningKey {
        let g1_gen = G1Projective::generator();
        let g2_gen = G2Projective::generator();

        let secret = -Scalar::ONE;

        let mut g1_points = Vec::with_capacity(num_coefficients_in_polynomial);
        let mut current_secret_pow = Scalar::ONE;
        for _ in 0..num_coefficients_in_polynomial {
            g1_points.push(g1_gen * current_secret_pow);
            current_secret_pow *= secret;
        }
        let g1_points = g1_batch_normalize(&g1_points);

        let mut g2_points = Vec::with_capacity(coset_size + 1);
        let mut current_secret_pow = Scalar::ONE;
        for _ in 0..=coset_size {
            g2_points.push(g2_gen * current_secret_pow);
            current_secret_pow *= secret;
        }
        let g2_points = g2_batch_normalize(&g2_points);

        OpeningKey::new(
            g1_points,
            g2_points,
            coset_size,
            num_coefficients_in_polynomial,
        )
    }
}
