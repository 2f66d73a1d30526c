//! Codecs for document and record headers.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

/// An error decoding a document header.
#[derive(Debug, Error)]
pub enum DocumentHeaderError {
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
}

/// The fixed prologue of a document.
///
/// Two variants exist on the wire: a common twelve-byte form, and an
/// extended fourteen-byte form carrying a checksum of the header. The
/// checksum is stored as found, without being verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Declared length of the header, twelve or fourteen.
    pub length: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Number of record bytes following the header.
    pub data_size: u32,
    /// Four-character document type tag.
    pub data_type: [u8; 4],
    /// Checksum from the extended variant's trailing bytes.
    pub checksum: Option<u16>,
}

impl DocumentHeader {
    /// Decode the common twelve bytes of a document header.
    ///
    /// When [`DocumentHeader::is_extended`] on the result, the two
    /// remaining bytes must be supplied to [`DocumentHeader::extend`].
    pub fn decode(r: [u8; 12]) -> Result<Self, DocumentHeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Prologue {
            length: u8,
            protocol_version: u8,
            profile_version: [u8; 2],
            data_size: [u8; 4],
            data_type: [u8; 4],
        }

        let Prologue {
            length,
            protocol_version,
            profile_version,
            data_size,
            data_type,
        } = zerocopy::transmute!(r);

        if length != 12 && length != 14 {
            Err(DocumentHeaderError::UnknownHeaderLength(length))?;
        }

        Ok(Self {
            length,
            protocol_version,
            profile_version: u16::from_be_bytes(profile_version),
            data_size: u32::from_be_bytes(data_size),
            data_type,
            checksum: None,
        })
    }

    /// Whether two additional bytes of an extended header follow.
    pub fn is_extended(&self) -> bool {
        self.length == 14
    }

    /// Store the checksum from the extended variant's trailing bytes.
    pub fn extend(&mut self, r: [u8; 2]) {
        self.checksum = Some(u16::from_le_bytes(r));
    }
}

/// The kind of message a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Definition,
    Data,
}

/// The single leading byte of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordHeader {
    /// The common header form.
    Normal {
        kind: MessageKind,
        /// Whether a definition appends developer field descriptions.
        developer: bool,
        local_message: u8,
    },
    /// A denser form folding a small time delta into the header byte, at
    /// the cost of a narrower local message range.
    CompressedTimestamp { local_message: u8, time_offset: u8 },
}

impl RecordHeader {
    /// Decode a record header byte.
    pub fn decode(r: [u8; 1]) -> Self {
        let r = r[0];

        bitfield! {
            struct Header(u8) {
                [7] is_compressed,
            }
        }

        if Header(r).is_compressed() {
            bitfield! {
                struct CompressedHeader(u8) {
                    [0..5] time_offset: u8,
                    [5..7] local_message: u8,
                }
            }

            let header = CompressedHeader(r);

            Self::CompressedTimestamp {
                local_message: header.local_message(),
                time_offset: header.time_offset(),
            }
        } else {
            bitfield! {
                struct NormalHeader(u8) {
                    [0..4] local_message: u8,
                    [5] is_developer,
                    [6] is_definition,
                }
            }

            let header = NormalHeader(r);

            let kind = if header.is_definition() {
                MessageKind::Definition
            } else {
                MessageKind::Data
            };

            Self::Normal {
                kind,
                developer: header.is_developer(),
                local_message: header.local_message(),
            }
        }
    }

    /// The local message slot this record refers to.
    pub fn local_message(&self) -> u8 {
        match self {
            Self::Normal { local_message, .. } => *local_message,
            Self::CompressedTimestamp { local_message, .. } => *local_message,
        }
    }

    /// The kind of message the record body holds.
    ///
    /// Compressed timestamp headers always introduce data.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Normal { kind, .. } => *kind,
            Self::CompressedTimestamp { .. } => MessageKind::Data,
        }
    }

    /// Whether a definition appends developer field descriptions.
    pub fn has_developer_data(&self) -> bool {
        matches!(self, Self::Normal { developer: true, .. })
    }
}
