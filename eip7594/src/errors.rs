use crate::CellIndex;

/// Errors that can occur while calling a method in the Prover API.
#[derive(Debug)]
pub enum ProverError {
    /// Error that occurred while serializing or deserializing data.
    Serialization(SerializationError),
    /// Underlying recovery failure encountered while recovering cells and proofs.
    RecoveryFailure(VerifierError),
}

impl From<SerializationError> for ProverError {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<VerifierError> for ProverError {
    fn from(value: VerifierError) -> Self {
        Self::RecoveryFailure(value)
    }
}

/// Errors that can occur while calling a method in the Verifier API.
///
/// This also covers data-recovery failures: recovery validates that the supplied
/// cells are consistent before reconstructing, so its failures are verification-adjacent.
#[derive(Debug)]
pub enum VerifierError {
    /// Error that occurred while serializing or deserializing data.
    Serialization(SerializationError),
    /// A cell index was out of the valid range for the given blob.
    CellIndexOutOfRange {
        cell_index: CellIndex,
        max_number_of_cells: u64,
    },
    /// A commitment index was outside the valid range.
    InvalidCommitmentIndex {
        commitment_index: u64,
        max_number_of_commitments: u64,
    },
    /// The number of provided cell indices does not match the number of provided cells.
    NumCellIndicesNotEqualToNumCells {
        num_cell_indices: usize,
        num_cells: usize,
    },
    /// Cell indices provided for reconstruction are not unique.
    CellIndicesNotUnique,
    /// Not enough cells were provided to reconstruct the original data.
    NotEnoughCellsToReconstruct {
        num_cells_received: usize,
        min_cells_needed: usize,
    },
    /// Too many cells were received for reconstruction.
    TooManyCellsReceived {
        num_cells_received: usize,
        max_cells_needed: usize,
    },
    /// Inputs to batch verification did not have consistent lengths.
    BatchVerificationInputsMustHaveSameLength {
        commitment_indices_len: usize,
        cell_indices_len: usize,
        cells_len: usize,
        proofs_len: usize,
    },
    /// Failure in the underlying Reed-Solomon decoding.
    ReedSolomon(erasure_codes::RSError),
}

impl From<SerializationError> for VerifierError {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<erasure_codes::RSError> for VerifierError {
    fn from(value: erasure_codes::RSError) -> Self {
        Self::ReedSolomon(value)
    }
}

/// Errors that can occur during deserialization of untrusted input from the public API
/// or the trusted setup.
#[derive(Debug)]
pub enum SerializationError {
    CouldNotDeserializeScalar { bytes: Vec<u8> },
    CouldNotDeserializeG1Point { bytes: Vec<u8> },
    ScalarHasInvalidLength { bytes: Vec<u8>, length: usize },
    BlobHasInvalidLength { bytes: Vec<u8>, length: usize },
    G1PointHasInvalidLength { bytes: Vec<u8>, length: usize },
}
