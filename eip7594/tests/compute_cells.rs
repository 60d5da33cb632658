mod common;

use common::{constant_blob, random_blob_from_seed, test_context};
use peerdas_kzg::constants::{BYTES_PER_CELL, CELLS_PER_EXT_BLOB};

#[test]
fn compute_cells_matches_the_cells_half_of_compute_cells_and_proofs() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);

    let cells_only = ctx.prover_ctx().compute_cells(&blob).unwrap();
    let (cells_and_proofs, _) = ctx.prover_ctx().compute_cells_and_proofs(&blob).unwrap();

    assert_eq!(cells_only, cells_and_proofs);
}

#[test]
fn empty_blob_produces_all_zero_cells() {
    let ctx = test_context();
    let blob: [u8; peerdas_kzg::constants::BYTES_PER_BLOB] =
        vec![0u8; peerdas_kzg::constants::BYTES_PER_BLOB]
            .try_into()
            .unwrap();

    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();

    assert_eq!(cells.len(), CELLS_PER_EXT_BLOB);
    for cell in &cells {
        assert_eq!(cell.as_ref(), &[0u8; BYTES_PER_CELL]);
    }
}

#[test]
fn constant_blob_produces_nonempty_cells() {
    let ctx = test_context();
    let blob = constant_blob(1);

    let cells = ctx.prover_ctx().compute_cells(&blob).unwrap();
    assert_eq!(cells.len(), CELLS_PER_EXT_BLOB);
}
