use bls12_381::{G1Point, Scalar};

pub use crate::errors::SerializationError;
use crate::{
    constants::{
        BYTES_PER_BLOB, BYTES_PER_CELL, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT,
        CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_CELL,
    },
    Cell, KZGProof,
};

fn deserialize_bytes_to_scalars(bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if bytes.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(SerializationError::ScalarHasInvalidLength {
            length: bytes.len(),
            bytes: bytes.to_vec(),
        });
    }

    bytes
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .map(deserialize_scalar)
        .collect()
}

pub(crate) fn deserialize_blob_to_scalars(
    blob_bytes: &[u8],
) -> Result<Vec<Scalar>, SerializationError> {
    if blob_bytes.len() != BYTES_PER_BLOB {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob_bytes.len(),
            bytes: blob_bytes.to_vec(),
        });
    }
    deserialize_bytes_to_scalars(blob_bytes)
}

pub(crate) fn deserialize_scalar(scalar_bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let bytes32: [u8; BYTES_PER_FIELD_ELEMENT] = scalar_bytes.try_into().expect("infallible: expected blob chunks to be exactly BYTES_PER_FIELD_ELEMENT bytes, since blob was a multiple of BYTES_PER_FIELD_ELEMENT");

    let option_scalar: Option<Scalar> = Scalar::from_bytes_be(&bytes32).into();
    option_scalar.map_or_else(
        || {
            Err(SerializationError::CouldNotDeserializeScalar {
                bytes: scalar_bytes.to_vec(),
            })
        },
        Ok,
    )
}

pub(crate) fn deserialize_compressed_g1(point_bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(point_bytes) = <[u8; BYTES_PER_G1_POINT]>::try_from(point_bytes) else {
        return Err(SerializationError::G1PointHasInvalidLength {
            length: point_bytes.len(),
            bytes: point_bytes.to_vec(),
        });
    };

    let opt_g1: Option<G1Point> = Option::from(G1Point::from_compressed(&point_bytes));
    opt_g1.ok_or_else(|| SerializationError::CouldNotDeserializeG1Point {
        bytes: point_bytes.to_vec(),
    })
}

/// Deserializes a list of compressed G1 point byte slices, failing on the first invalid point.
pub(crate) fn deserialize_compressed_g1_points(
    points: Vec<&[u8; BYTES_PER_G1_POINT]>,
) -> Result<Vec<G1Point>, SerializationError> {
    points
        .into_iter()
        .map(|point| deserialize_compressed_g1(point))
        .collect()
}

pub(crate) fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

pub(crate) fn serialize_scalars_to_cell(scalars: &[Scalar]) -> Vec<u8> {
    assert_eq!(
        scalars.len(),
        FIELD_ELEMENTS_PER_CELL,
        "must have exactly {FIELD_ELEMENTS_PER_CELL} scalars to serialize to a cell"
    );

    scalars.iter().flat_map(Scalar::to_bytes_be).collect()
}

/// Deserializes a vector of cell byte slices into vectors of `Scalar`s.
pub(crate) fn deserialize_cells(
    cells: Vec<&[u8; BYTES_PER_CELL]>,
) -> Result<Vec<Vec<Scalar>>, SerializationError> {
    cells
        .into_iter()
        .map(|cell| deserialize_bytes_to_scalars(cell))
        .collect()
}

/// Serializes a list of evaluation sets into an array of `Cell`s.
pub(crate) fn serialize_cells(coset_evaluations: &[Vec<Scalar>]) -> [Cell; CELLS_PER_EXT_BLOB] {
    std::array::from_fn(|i| {
        let bytes = serialize_scalars_to_cell(&coset_evaluations[i]);
        bytes
            .into_boxed_slice()
            .try_into()
            .expect("infallible: serialized cell must be BYTES_PER_CELL long")
    })
}

/// Serializes both cells and corresponding proofs into flat output formats.
pub(crate) fn serialize_cells_and_proofs(
    coset_evaluations: &[Vec<Scalar>],
    proofs: &[G1Point],
) -> ([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]) {
    (
        serialize_cells(coset_evaluations),
        std::array::from_fn(|i| serialize_g1_compressed(&proofs[i])),
    )
}
