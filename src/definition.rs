//! Codecs for definition messages and their field descriptions.

use alloc::vec::Vec;

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

use crate::message::MessageCategory;

/// An error decoding a field description.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Unknown base type number.
    #[error("Unknown base type number ({0}).")]
    UnknownBaseType(u8),
}

/// Base types of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Enum,
    SInt8,
    UInt8,
    SInt16,
    UInt16,
    SInt32,
    UInt32,
    String,
    Float32,
    Float64,
    UInt8z,
    UInt16z,
    UInt32z,
    Byte,
    SInt64,
    UInt64,
    UInt64z,
}

impl BaseType {
    /// Resolve a base type from its number.
    pub fn from_number(number: u8) -> Result<Self, DefinitionError> {
        Ok(match number {
            0 => Self::Enum,
            1 => Self::SInt8,
            2 => Self::UInt8,
            3 => Self::SInt16,
            4 => Self::UInt16,
            5 => Self::SInt32,
            6 => Self::UInt32,
            7 => Self::String,
            8 => Self::Float32,
            9 => Self::Float64,
            10 => Self::UInt8z,
            11 => Self::UInt16z,
            12 => Self::UInt32z,
            13 => Self::Byte,
            14 => Self::SInt64,
            15 => Self::UInt64,
            16 => Self::UInt64z,
            _ => Err(DefinitionError::UnknownBaseType(number))?,
        })
    }

    /// Encoded width of a single value of this type, in bytes.
    pub fn width(self) -> u8 {
        match self {
            Self::Enum | Self::SInt8 | Self::UInt8 | Self::String | Self::UInt8z | Self::Byte => 1,
            Self::SInt16 | Self::UInt16 | Self::UInt16z => 2,
            Self::SInt32 | Self::UInt32 | Self::Float32 | Self::UInt32z => 4,
            Self::Float64 | Self::SInt64 | Self::UInt64 | Self::UInt64z => 8,
        }
    }
}

/// How the bytes of a field are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A built-in type from the base type table.
    Normal {
        base_type: BaseType,
        /// Whether the type is subject to the definition's byte order.
        endian_capable: bool,
    },
    /// A device-supplied type, decoded as opaque bytes.
    Developer { data_index: u8 },
}

/// A single field description within a definition message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub number: u8,
    /// Declared size of the field's value in a data message, in bytes.
    pub size: u8,
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Decode a built-in field description.
    pub fn decode(r: [u8; 3]) -> Result<Self, DefinitionError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FieldHeader {
            number: u8,
            size: u8,
            base_type: u8,
        }

        bitfield! {
            struct BaseTypeByte(u8) {
                [0..5] number: u8,
                [7] is_endian_capable,
            }
        }

        let FieldHeader {
            number,
            size,
            base_type,
        } = zerocopy::transmute!(r);

        let base_type = BaseTypeByte(base_type);

        Ok(Self {
            number,
            size,
            kind: FieldKind::Normal {
                base_type: BaseType::from_number(base_type.number())?,
                endian_capable: base_type.is_endian_capable(),
            },
        })
    }

    /// Decode a developer field description.
    pub fn decode_developer(r: [u8; 3]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FieldHeader {
            number: u8,
            size: u8,
            data_index: u8,
        }

        let FieldHeader {
            number,
            size,
            data_index,
        } = zerocopy::transmute!(r);

        Self {
            number,
            size,
            kind: FieldKind::Developer { data_index },
        }
    }
}

/// The field layout declared for a local message slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMessage {
    /// Raw architecture byte; zero selects little-endian values.
    pub architecture: u8,
    pub global_message: u16,
    pub category: MessageCategory,
    /// Field descriptions in declaration order, built-in fields first,
    /// followed by any developer fields. The order fixes the byte offset
    /// of every field in a matching data message.
    pub fields: Vec<FieldDefinition>,
}

impl DefinitionMessage {
    /// Decode the five-byte fixed content of a definition message.
    ///
    /// Returns the message with an empty field list, and the declared
    /// number of built-in field descriptions that follow.
    pub fn decode(r: [u8; 5]) -> (Self, u8) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FixedContent {
            _reserved: u8,
            architecture: u8,
            global_message: [u8; 2],
            field_count: u8,
        }

        let FixedContent {
            architecture,
            global_message,
            field_count,
            ..
        } = zerocopy::transmute!(r);

        let global_message = if architecture == 0 {
            u16::from_le_bytes(global_message)
        } else {
            u16::from_be_bytes(global_message)
        };

        let message = Self {
            architecture,
            global_message,
            category: MessageCategory::from_number(global_message),
            fields: Vec::new(),
        };

        (message, field_count)
    }

    /// Whether multi-byte field values decode as little-endian.
    pub fn is_little_endian(&self) -> bool {
        self.architecture == 0
    }

    /// Number of bytes a matching data message occupies.
    pub fn data_size(&self) -> usize {
        self.fields.iter().map(|f| f.size as usize).sum()
    }
}
