use bls12_381::{
    ff::Field, group::Group, g1_batch_normalize, g2_batch_normalize, G1Point, G1Projective,
    G2Point, G2Projective, Scalar,
};
use kzg_multi_open::OpeningKey;
use rand::thread_rng;
use serde::Deserialize;

use crate::constants::FIELD_ELEMENTS_PER_BLOB;
#[cfg(test)]
use crate::constants::FIELD_ELEMENTS_PER_CELL;

/// Represents the Ethereum trusted setup used for KZG commitments on the BLS12-381 curve.
///
/// This struct holds hex-encoded group elements in G1 and G2, provided in monomial and Lagrange
/// bases, in the format used by the Ethereum consensus specifications.
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct TrustedSetup {
    /// Uncompressed hex encoded group elements in the G1 group, in monomial basis.
    pub g1_monomial: Vec<String>,
    /// Uncompressed hex encoded group elements in the G1 group, in Lagrange basis.
    ///
    /// These are related to `g1_monomial` in that they are what one would get if an inverse
    /// FFT were done on the monomial elements. Kept for format compatibility with the
    /// consensus-specs trusted setup file; unused by this crate since FK20 is out of scope here.
    pub g1_lagrange: Vec<String>,
    /// Uncompressed hex encoded group elements in the G2 group, in monomial basis.
    pub g2_monomial: Vec<String>,
}

/// An enum used to specify whether to check that the points are in the correct subgroup.
#[derive(Debug, Copy, Clone)]
enum SubgroupCheck {
    Check,
    NoCheck,
}

impl From<&TrustedSetup> for OpeningKey {
    fn from(setup: &TrustedSetup) -> Self {
        setup.to_opening_key(SubgroupCheck::NoCheck)
    }
}

impl TrustedSetup {
    /// Parses a JSON string in the format specified by the Ethereum trusted setup.
    ///
    /// The file used on mainnet is located here: https://github.com/ethereum/consensus-specs/blob/389b2ddfb954731da7ccf4c0ef89fab2d4575b99/presets/mainnet/trusted_setups/trusted_setup_4096.json
    ///
    /// This crate does not vendor a copy of that file; callers load it from wherever their
    /// deployment keeps it and pass the contents here.
    pub fn from_json(json: &str) -> Self {
        let trusted_setup = Self::from_json_unchecked(json);
        trusted_setup.validate_trusted_setup();
        trusted_setup
    }

    /// Parses a JSON string in the format specified by the Ethereum trusted setup.
    ///
    /// This method does not check that the points are in the correct subgroup.
    pub fn from_json_unchecked(json: &str) -> Self {
        // Note: it is fine to panic here since this method is called on startup
        // and we want to fail fast if the trusted setup is malformed.
        serde_json::from_str(json)
            .expect("could not parse json string into a TrustedSetup structure")
    }

    /// Generates an ephemeral, randomly-chosen (non-ceremony) setup in-process.
    ///
    /// This must never be used outside of tests, doctests, or `DASContext::default()`: the
    /// "toxic waste" scalar used to generate it is never discarded, so anyone who reconstructs
    /// it (trivially, since it is sampled in-process with a non-hardened RNG) can forge proofs.
    pub fn insecure_ephemeral(num_g1: usize, num_g2: usize) -> Self {
        let secret = Scalar::random(thread_rng());

        let mut g1_points = Vec::with_capacity(num_g1);
        let mut current = Scalar::ONE;
        for _ in 0..num_g1 {
            g1_points.push(G1Projective::generator() * current);
            current *= secret;
        }
        let g1_points = g1_batch_normalize(&g1_points);

        let mut g2_points = Vec::with_capacity(num_g2);
        let mut current = Scalar::ONE;
        for _ in 0..num_g2 {
            g2_points.push(G2Projective::generator() * current);
            current *= secret;
        }
        let g2_points = g2_batch_normalize(&g2_points);

        Self {
            g1_monomial: g1_points
                .iter()
                .map(|p| format!("0x{}", hex::encode(p.to_compressed())))
                .collect(),
            g1_lagrange: Vec::new(),
            g2_monomial: g2_points
                .iter()
                .map(|p| format!("0x{}", hex::encode(p.to_compressed())))
                .collect(),
        }
    }

    /// Validates that the points in the trusted setup are in the correct subgroup.
    ///
    /// Panics if any of the points are not in the correct subgroup.
    fn validate_trusted_setup(&self) {
        self.to_opening_key(SubgroupCheck::Check);
    }

    fn to_opening_key(&self, subgroup_check: SubgroupCheck) -> OpeningKey {
        let num_g2_points = self.g2_monomial.len();
        let g2_points = deserialize_g2_points(&self.g2_monomial, subgroup_check);
        let g1_points = deserialize_g1_points(&self.g1_monomial, subgroup_check);

        OpeningKey::new(
            g1_points,
            g2_points,
            num_g2_points - 1,
            FIELD_ELEMENTS_PER_BLOB,
        )
    }
}

/// Deserialize G1 points from hex strings.
fn deserialize_g1_points<T: AsRef<str>>(
    g1_points_hex_str: &[T],
    check: SubgroupCheck,
) -> Vec<G1Point> {
    g1_points_hex_str
        .iter()
        .map(|hex_str| {
            let hex_str = hex_str
                .as_ref()
                .strip_prefix("0x")
                .expect("expected hex points to be prefixed with `0x`");

            let bytes: [u8; 48] = hex::decode(hex_str)
                .expect("trusted setup has malformed g1 points")
                .try_into()
                .expect("expected 48 bytes for G1 point");

            match check {
                SubgroupCheck::Check => G1Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G1Point::from_compressed_unchecked(&bytes),
            }
            .expect("invalid g1 point")
        })
        .collect()
}

/// Deserialize G2 points from hex strings.
fn deserialize_g2_points<T: AsRef<str>>(
    g2_points_hex_str: &[T],
    subgroup_check: SubgroupCheck,
) -> Vec<G2Point> {
    g2_points_hex_str
        .iter()
        .map(|hex_str| {
            let hex_str = hex_str
                .as_ref()
                .strip_prefix("0x")
                .expect("expected hex points to be prefixed with `0x`");

            let bytes: [u8; 96] = hex::decode(hex_str)
                .expect("trusted setup has malformed g2 points")
                .try_into()
                .expect("expected 96 bytes for G2 point");

            match subgroup_check {
                SubgroupCheck::Check => G2Point::from_compressed(&bytes),
                SubgroupCheck::NoCheck => G2Point::from_compressed_unchecked(&bytes),
            }
            .expect("invalid g2 point")
        })
        .collect()
}
