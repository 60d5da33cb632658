pub use crate::errors::ProverError;

use bls12_381::Scalar;
use kzg_multi_open::{coset_for_cell, naive, OpeningKey};
use polynomial::domain::Domain;

use crate::{
    constants::{
        CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
        FIELD_ELEMENTS_PER_EXT_BLOB,
    },
    serialization::{self, serialize_cells_and_proofs, serialize_g1_compressed},
    trusted_setup::TrustedSetup,
    BlobRef, Cell, KZGCommitment, KZGProof,
};

/// Context object that is used to call functions in the prover API.
#[derive(Debug)]
pub struct ProverContext {
    opening_key: OpeningKey,
    /// Domain over which a blob's `FIELD_ELEMENTS_PER_BLOB` coefficients sit.
    poly_domain: Domain,
    /// Domain extended by `EXTENSION_FACTOR`, over which cells are opened.
    extended_domain: Domain,
}

impl Default for ProverContext {
    fn default() -> Self {
        let trusted_setup =
            TrustedSetup::insecure_ephemeral(FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL + 1);
        Self::new(&trusted_setup)
    }
}

impl ProverContext {
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            opening_key: OpeningKey::from(trusted_setup),
            poly_domain: Domain::new(FIELD_ELEMENTS_PER_BLOB),
            extended_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB),
        }
    }

    /// Computes the KZG commitment to a blob's polynomial, against the monomial-basis G1
    /// trusted setup.
    ///
    /// Not part of the cell/proof data-availability surface: callers that build
    /// `DataColumnSidecar`s need it to populate the commitment each sidecar carries.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, ProverError> {
        let scalars = serialization::deserialize_blob_to_scalars(blob)?;
        let poly_coeff = self.poly_domain.ifft_scalars(scalars);
        let commitment = self.opening_key.commit_g1(&poly_coeff).into();
        Ok(serialize_g1_compressed(&commitment))
    }

    /// Computes the cells and KZG proofs for the given blob.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#compute_cells_and_kzg_proofs
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells_and_proofs(
        &self,
        blob: BlobRef,
    ) -> Result<([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]), ProverError> {
        let scalars = serialization::deserialize_blob_to_scalars(blob)?;
        let poly_coeff = self.poly_domain.ifft_scalars(scalars);
        Ok(self.compute_cells_and_proofs_from_poly_coeff(&poly_coeff))
    }

    /// Computes only the cells for the given blob, without the accompanying proofs.
    ///
    /// Cheaper than [`Self::compute_cells_and_proofs`] when proofs are not needed, eg
    /// when only checking that a blob extends consistently.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells(&self, blob: BlobRef) -> Result<[Cell; CELLS_PER_EXT_BLOB], ProverError> {
        let scalars = serialization::deserialize_blob_to_scalars(blob)?;
        let poly_coeff = self.poly_domain.ifft_scalars(scalars);
        Ok(cells_from_poly_coeff(&self.extended_domain, &poly_coeff))
    }

    fn compute_cells_and_proofs_from_poly_coeff(
        &self,
        poly_coeff: &[Scalar],
    ) -> ([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]) {
        let mut coset_evaluations = Vec::with_capacity(CELLS_PER_EXT_BLOB);
        let mut proofs = Vec::with_capacity(CELLS_PER_EXT_BLOB);

        for cell_index in 0..CELLS_PER_EXT_BLOB {
            let coset = coset_for_cell(cell_index, &self.extended_domain, CELLS_PER_EXT_BLOB);
            let (quotient_commitment, evaluations) =
                naive::compute_multi_opening(&self.opening_key, poly_coeff, &coset);
            coset_evaluations.push(evaluations);
            proofs.push(quotient_commitment);
        }

        serialize_cells_and_proofs(&coset_evaluations, &proofs)
    }
}

/// Evaluates `poly_coeff` on every cell's coset of `extended_domain` and serializes the result.
///
/// Shared with [`crate::verifier::VerifierContext::recover_all_cells`], which recovers
/// `poly_coeff` via erasure decoding before handing it back here for re-evaluation.
pub(crate) fn cells_from_poly_coeff(
    extended_domain: &Domain,
    poly_coeff: &[Scalar],
) -> [Cell; CELLS_PER_EXT_BLOB] {
    let coset_evaluations: Vec<Vec<Scalar>> = (0..CELLS_PER_EXT_BLOB)
        .map(|cell_index| {
            let coset = coset_for_cell(cell_index, extended_domain, CELLS_PER_EXT_BLOB);
            coset
                .iter()
                .map(|point| polynomial::poly_coeff::poly_eval(poly_coeff, point))
                .collect()
        })
        .collect();

    serialization::serialize_cells(&coset_evaluations)
}
