pub use crate::errors::VerifierError;

use std::collections::HashMap;
use std::hash::Hash;

use erasure_codes::ReedSolomon;
use kzg_multi_open::{coset_for_cell, naive, OpeningKey};
use polynomial::domain::Domain;

use crate::{
    constants::{
        BYTES_PER_COMMITMENT, CELLS_PER_EXT_BLOB, EXTENSION_FACTOR, FIELD_ELEMENTS_PER_BLOB,
        FIELD_ELEMENTS_PER_CELL, FIELD_ELEMENTS_PER_EXT_BLOB,
    },
    prover::cells_from_poly_coeff,
    serialization, Bytes48Ref, Cell, CellIndex, CellRef, TrustedSetup,
};

/// Context object that is used to call functions in the verifier API.
#[derive(Debug)]
pub struct VerifierContext {
    opening_key: OpeningKey,
    extended_domain: Domain,
    reed_solomon: ReedSolomon,
}

impl Default for VerifierContext {
    fn default() -> Self {
        let trusted_setup =
            TrustedSetup::insecure_ephemeral(FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL + 1);
        Self::new(&trusted_setup)
    }
}

impl VerifierContext {
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            opening_key: OpeningKey::from(trusted_setup),
            extended_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB),
            reed_solomon: ReedSolomon::new(
                FIELD_ELEMENTS_PER_BLOB,
                EXTENSION_FACTOR,
                CELLS_PER_EXT_BLOB,
            ),
        }
    }

    /// Verifies that `cell` opens to `proof` against `commitment`, on the coset for `cell_index`.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#verify_cell_kzg_proof
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_cell_proof(
        &self,
        commitment_bytes: Bytes48Ref,
        cell_index: CellIndex,
        cell: CellRef,
        proof_bytes: Bytes48Ref,
    ) -> Result<bool, VerifierError> {
        if cell_index as usize >= CELLS_PER_EXT_BLOB {
            return Err(VerifierError::CellIndexOutOfRange {
                cell_index,
                max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
            });
        }

        let commitment = serialization::deserialize_compressed_g1(commitment_bytes)?;
        let proof = serialization::deserialize_compressed_g1(proof_bytes)?;
        let mut coset_evaluations = serialization::deserialize_cells(vec![cell])?;
        let coset_evaluations = coset_evaluations.remove(0);

        let coset = coset_for_cell(cell_index as usize, &self.extended_domain, CELLS_PER_EXT_BLOB);

        Ok(naive::verify_multi_opening(
            &self.opening_key,
            commitment,
            proof,
            &coset,
            &coset_evaluations,
        ))
    }

    /// Verifies a batch of cell proofs, each against its own row commitment and coset.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#verify_cell_kzg_proof_batch
    ///
    /// This verifies every entry individually rather than aggregating the pairing checks into
    /// one: the naive semantics are what the gossip validation rule in spec.md calls for, and
    /// are required for observational equivalence with any aggregated verifier that might
    /// replace this one.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_cell_proof_batch(
        &self,
        row_commitments_bytes: Vec<Bytes48Ref>,
        row_indices: Vec<u64>,
        column_indices: Vec<CellIndex>,
        cells: Vec<CellRef>,
        proofs_bytes: Vec<Bytes48Ref>,
    ) -> Result<bool, VerifierError> {
        validation::verify_cell_proof_batch(
            &row_commitments_bytes,
            &row_indices,
            &column_indices,
            &cells,
            &proofs_bytes,
        )?;

        let (deduplicated_commitments, row_indices) =
            deduplicate_with_indices(row_commitments_bytes);
        let commitments = serialization::deserialize_compressed_g1_points(
            deduplicated_commitments
                .into_iter()
                .map(|bytes| bytes as &[u8; BYTES_PER_COMMITMENT])
                .collect(),
        )?;

        for (((&row_index, &column_index), cell), proof_bytes) in row_indices
            .iter()
            .zip(column_indices.iter())
            .zip(cells.iter())
            .zip(proofs_bytes.iter())
        {
            let commitment = commitments[row_index as usize];
            let proof = serialization::deserialize_compressed_g1(*proof_bytes)?;
            let mut coset_evaluations = serialization::deserialize_cells(vec![*cell])?;
            let coset_evaluations = coset_evaluations.remove(0);
            let coset =
                coset_for_cell(column_index as usize, &self.extended_domain, CELLS_PER_EXT_BLOB);

            if !naive::verify_multi_opening(
                &self.opening_key,
                commitment,
                proof,
                &coset,
                &coset_evaluations,
            ) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Recovers every cell of the extended blob from a half-or-more subset of its cells.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#recover_cells_and_kzg_proofs
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover_all_cells(
        &self,
        cell_indices: Vec<CellIndex>,
        cells: Vec<CellRef>,
    ) -> Result<[Cell; CELLS_PER_EXT_BLOB], VerifierError> {
        let poly_coeff =
            crate::recovery::recover_polynomial_coeff(&self.reed_solomon, cell_indices, cells)?;
        Ok(cells_from_poly_coeff(&self.extended_domain, &poly_coeff))
    }
}

/// Deduplicates `input`, returning the deduplicated list alongside, for each original element,
/// the index into the deduplicated list it now corresponds to.
fn deduplicate_with_indices<T: Eq + Hash + Clone>(input: Vec<T>) -> (Vec<T>, Vec<u64>) {
    let mut deduplicated = Vec::new();
    let mut seen = HashMap::new();
    let mut indices = Vec::with_capacity(input.len());

    for item in input {
        let index = *seen.entry(item.clone()).or_insert_with(|| {
            deduplicated.push(item);
            (deduplicated.len() - 1) as u64
        });
        indices.push(index);
    }

    (deduplicated, indices)
}

mod validation {
    use super::VerifierError;
    use crate::{constants::CELLS_PER_EXT_BLOB, Bytes48Ref, CellIndex, CellRef};

    pub(super) fn verify_cell_proof_batch(
        row_commitments_bytes: &[Bytes48Ref],
        row_indices: &[u64],
        column_indices: &[CellIndex],
        cells: &[CellRef],
        proofs_bytes: &[Bytes48Ref],
    ) -> Result<(), VerifierError> {
        let same_length = row_indices.len() == column_indices.len()
            && row_indices.len() == cells.len()
            && row_indices.len() == proofs_bytes.len();
        if !same_length {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len: row_indices.len(),
                cell_indices_len: column_indices.len(),
                cells_len: cells.len(),
                proofs_len: proofs_bytes.len(),
            });
        }

        for &row_index in row_indices {
            if row_index as usize >= row_commitments_bytes.len() {
                return Err(VerifierError::InvalidCommitmentIndex {
                    commitment_index: row_index,
                    max_number_of_commitments: row_commitments_bytes.len() as u64,
                });
            }
        }

        for &column_index in column_indices {
            if column_index as usize >= CELLS_PER_EXT_BLOB {
                return Err(VerifierError::CellIndexOutOfRange {
                    cell_index: column_index,
                    max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicate_with_indices() {
        let input = vec![0, 1, 0, 2, 3, 4, 0];
        let (deduplicated, indices) = deduplicate_with_indices(input);
        assert_eq!(deduplicated, vec![0, 1, 2, 3, 4]);
        assert_eq!(indices, vec![0, 1, 0, 2, 3, 4, 0]);
    }

    #[test]
    fn batch_verification_rejects_mismatched_lengths() {
        let row_commitments: Vec<Bytes48Ref> = vec![];
        let err =
            validation::verify_cell_proof_batch(&row_commitments, &[0, 1], &[0], &[], &[])
                .unwrap_err();
        assert!(matches!(
            err,
            VerifierError::BatchVerificationInputsMustHaveSameLength { .. }
        ));
    }
}
