mod common;

use common::{constant_blob, random_blob_from_seed, test_context};
use peerdas_kzg::constants::CELLS_PER_EXT_BLOB;
use peerdas_kzg::VerifierError;

/// Scenario 2: a constant blob's cells recover identically from any half of the cells.
#[test]
fn constant_blob_recovers_from_any_half() {
    let ctx = test_context();
    let blob = constant_blob(1);
    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();

    let even_ids: Vec<u64> = (0..CELLS_PER_EXT_BLOB as u64).step_by(2).collect();
    let even_cells: Vec<_> = even_ids.iter().map(|&i| cells[i as usize].as_ref()).collect();
    let recovered_from_even = ctx
        .verifier_ctx()
        .recover_all_cells(even_ids, even_cells)
        .unwrap();

    let odd_ids: Vec<u64> = (1..CELLS_PER_EXT_BLOB as u64).step_by(2).collect();
    let odd_cells: Vec<_> = odd_ids.iter().map(|&i| cells[i as usize].as_ref()).collect();
    let recovered_from_odd = ctx
        .verifier_ctx()
        .recover_all_cells(odd_ids, odd_cells)
        .unwrap();

    assert_eq!(recovered_from_even, cells);
    assert_eq!(recovered_from_odd, cells);
}

/// Scenario 3: dropping every even-indexed cell still allows exact recovery from the odd half.
#[test]
fn random_blob_recovers_bit_for_bit_from_odd_half() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);
    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();

    let odd_ids: Vec<u64> = (1..CELLS_PER_EXT_BLOB as u64).step_by(2).collect();
    let odd_cells: Vec<_> = odd_ids.iter().map(|&i| cells[i as usize].as_ref()).collect();

    let recovered = ctx
        .verifier_ctx()
        .recover_all_cells(odd_ids, odd_cells)
        .unwrap();

    assert_eq!(recovered, cells);
}

/// Scenario 7: fewer than half the cells cannot be recovered from.
#[test]
fn insufficient_cells_is_rejected() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);
    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();

    let num_cells = CELLS_PER_EXT_BLOB / 2 - 1;
    let ids: Vec<u64> = (0..num_cells as u64).collect();
    let cell_refs: Vec<_> = ids.iter().map(|&i| cells[i as usize].as_ref()).collect();

    let err = ctx.verifier_ctx().recover_all_cells(ids, cell_refs).unwrap_err();
    assert!(matches!(
        err,
        VerifierError::NotEnoughCellsToReconstruct { .. }
    ));
}

/// Scenario 8: duplicate cell indices in the recovery input are rejected.
#[test]
fn duplicate_cell_indices_are_rejected() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);
    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();

    let num_cells = CELLS_PER_EXT_BLOB / 2;
    let mut ids: Vec<u64> = (0..num_cells as u64).collect();
    ids[1] = ids[0];
    let cell_refs: Vec<_> = ids.iter().map(|&i| cells[i as usize].as_ref()).collect();

    let err = ctx.verifier_ctx().recover_all_cells(ids, cell_refs).unwrap_err();
    assert!(matches!(err, VerifierError::CellIndicesNotUnique));
}
