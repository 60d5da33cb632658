use bls12_381::Scalar;
use erasure_codes::{BlockErasureIndices, ReedSolomon};
use std::collections::HashSet;

use crate::{
    constants::{CELLS_PER_EXT_BLOB, EXTENSION_FACTOR, FIELD_ELEMENTS_PER_EXT_BLOB},
    errors::VerifierError,
    serialization, CellIndex, CellRef,
};

/// Recovers a blob's polynomial, in coefficient form, from a subset of its extended cells.
///
/// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#recover_polynomialcoeff
pub(crate) fn recover_polynomial_coeff(
    rs: &ReedSolomon,
    cell_indices: Vec<CellIndex>,
    cells: Vec<CellRef>,
) -> Result<Vec<Scalar>, VerifierError> {
    validation::recover_polynomial_coeff(&cell_indices, &cells)?;

    let coset_evaluations = serialization::deserialize_cells(cells)?;
    let cell_indices: Vec<usize> = cell_indices
        .into_iter()
        .map(|index| index as usize)
        .collect();

    let (domain_order_indices, flattened_evaluations) =
        kzg_multi_open::recover_evaluations_in_domain_order(
            FIELD_ELEMENTS_PER_EXT_BLOB,
            cell_indices,
            coset_evaluations,
        )
        .expect(
            "cell indices and coset evaluations have the same length and are in range, \
             as checked by the validation step above",
        );

    let missing_cell_indices = find_missing_cell_indices(&domain_order_indices);

    Ok(rs.recover_polynomial_coefficient(
        flattened_evaluations,
        BlockErasureIndices(missing_cell_indices),
    )?)
}

/// Returns every cell index in `0..CELLS_PER_EXT_BLOB` that does not appear in `present`.
fn find_missing_cell_indices(present: &[usize]) -> Vec<usize> {
    let present: HashSet<_> = present.iter().copied().collect();
    (0..CELLS_PER_EXT_BLOB)
        .filter(|index| !present.contains(index))
        .collect()
}

mod validation {
    use std::collections::HashSet;

    use crate::{constants::CELLS_PER_EXT_BLOB, errors::VerifierError, CellIndex, CellRef};

    use super::EXTENSION_FACTOR;

    pub(super) fn recover_polynomial_coeff(
        cell_indices: &[CellIndex],
        cells: &[CellRef],
    ) -> Result<(), VerifierError> {
        if cell_indices.len() != cells.len() {
            return Err(VerifierError::NumCellIndicesNotEqualToNumCells {
                num_cell_indices: cell_indices.len(),
                num_cells: cells.len(),
            });
        }

        for cell_index in cell_indices {
            if *cell_index as usize >= CELLS_PER_EXT_BLOB {
                return Err(VerifierError::CellIndexOutOfRange {
                    cell_index: *cell_index,
                    max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
                });
            }
        }

        if !are_cell_indices_unique(cell_indices) {
            return Err(VerifierError::CellIndicesNotUnique);
        }

        let min_cells_needed = CELLS_PER_EXT_BLOB / EXTENSION_FACTOR;
        if cell_indices.len() < min_cells_needed {
            return Err(VerifierError::NotEnoughCellsToReconstruct {
                num_cells_received: cell_indices.len(),
                min_cells_needed,
            });
        }

        if cell_indices.len() > CELLS_PER_EXT_BLOB {
            return Err(VerifierError::TooManyCellsReceived {
                num_cells_received: cell_indices.len(),
                max_cells_needed: CELLS_PER_EXT_BLOB,
            });
        }

        Ok(())
    }

    fn are_cell_indices_unique(cell_indices: &[CellIndex]) -> bool {
        let mut seen = HashSet::with_capacity(cell_indices.len());
        cell_indices.iter().all(|index| seen.insert(*index))
    }
}
