//! Codec for data messages.

use alloc::vec::Vec;

use thiserror::Error;

use crate::definition::{DefinitionMessage, FieldKind};

/// An error decoding a data message.
#[derive(Debug, Error)]
pub enum DataError {
    /// Payload length does not match the governing definition.
    #[error("Malformed buffer: definition declares {declared} bytes, found {found}.")]
    MalformedBuffer { declared: usize, found: usize },
    /// A field's declared size is not a whole number of values.
    #[error("Field size ({size}) is not a multiple of its base type width ({width}).")]
    MisalignedField { size: u8, width: u8 },
}

/// A decoded field value.
///
/// Numeric values are widened to sixty-four bits regardless of their base
/// type's width. A field declared larger than one value of its base type
/// holds an array of repeated values and decodes to [`Value::Array`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unsigned(u64),
    Array(Vec<u64>),
    /// The uninterpreted bytes of a developer field.
    Bytes(Vec<u8>),
}

/// The decoded values of a single data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMessage {
    /// One value per field description of the governing definition, in
    /// declaration order.
    pub values: Vec<Value>,
}

impl DataMessage {
    /// Decode a data message against its governing definition.
    ///
    /// The payload must be exactly as long as the definition declares.
    pub fn decode(definition: &DefinitionMessage, payload: &[u8]) -> Result<Self, DataError> {
        if payload.len() != definition.data_size() {
            Err(DataError::MalformedBuffer {
                declared: definition.data_size(),
                found: payload.len(),
            })?;
        }

        let is_le = definition.is_little_endian();

        let mut values = Vec::with_capacity(definition.fields.len());
        let mut offset = 0;

        for field in &definition.fields {
            let bytes = &payload[offset..offset + field.size as usize];
            offset += field.size as usize;

            let value = match field.kind {
                FieldKind::Developer { .. } => Value::Bytes(bytes.to_vec()),
                FieldKind::Normal { base_type, .. } => {
                    let width = base_type.width();

                    if field.size % width != 0 {
                        Err(DataError::MisalignedField {
                            size: field.size,
                            width,
                        })?;
                    }

                    if field.size == width {
                        Value::Unsigned(read_unsigned(bytes, is_le))
                    } else {
                        Value::Array(
                            bytes
                                .chunks_exact(width as usize)
                                .map(|chunk| read_unsigned(chunk, is_le))
                                .collect(),
                        )
                    }
                }
            };

            values.push(value);
        }

        Ok(Self { values })
    }
}

/// Read one value of up to eight bytes, widening to a `u64`.
fn read_unsigned(bytes: &[u8], is_le: bool) -> u64 {
    let mut buf = [0; 8];

    if is_le {
        buf[..bytes.len()].copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    } else {
        buf[8 - bytes.len()..].copy_from_slice(bytes);
        u64::from_be_bytes(buf)
    }
}
