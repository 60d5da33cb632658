mod common;

use common::{random_blob_from_seed, test_context};

/// Scenario 4: flipping the last byte of a cell must invalidate its proof.
#[test]
fn tampered_cell_fails_verification() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);

    let commitment = ctx.prover_ctx().blob_to_kzg_commitment(&blob).unwrap();
    let (mut cells, proofs) = ctx.prover_ctx().compute_cells_and_proofs(&blob).unwrap();

    let last = cells[0].len() - 1;
    cells[0][last] ^= 0xff;

    let ok = ctx
        .verifier_ctx()
        .verify_cell_proof(&commitment, 0, &cells[0], &proofs[0])
        .unwrap();
    assert!(!ok);
}

/// Scenario 5: the same cell/proof pair verified against a different coset must fail.
#[test]
fn wrong_coset_fails_verification() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);

    let commitment = ctx.prover_ctx().blob_to_kzg_commitment(&blob).unwrap();
    let (cells, proofs) = ctx.prover_ctx().compute_cells_and_proofs(&blob).unwrap();

    let ok = ctx
        .verifier_ctx()
        .verify_cell_proof(&commitment, 1, &cells[0], &proofs[0])
        .unwrap();
    assert!(!ok);
}

#[test]
fn honest_cell_verifies() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);

    let commitment = ctx.prover_ctx().blob_to_kzg_commitment(&blob).unwrap();
    let (cells, proofs) = ctx.prover_ctx().compute_cells_and_proofs(&blob).unwrap();

    let ok = ctx
        .verifier_ctx()
        .verify_cell_proof(&commitment, 3, &cells[3], &proofs[3])
        .unwrap();
    assert!(ok);
}

#[test]
fn out_of_range_cell_index_is_rejected() {
    let ctx = test_context();
    let blob = random_blob_from_seed(0x5eed);

    let commitment = ctx.prover_ctx().blob_to_kzg_commitment(&blob).unwrap();
    let (cells, proofs) = ctx.prover_ctx().compute_cells_and_proofs(&blob).unwrap();

    let err = ctx
        .verifier_ctx()
        .verify_cell_proof(
            &commitment,
            peerdas_kzg::constants::CELLS_PER_EXT_BLOB as u64,
            &cells[0],
            &proofs[0],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        peerdas_kzg::VerifierError::CellIndexOutOfRange { .. }
    ));
}
