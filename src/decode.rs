//! Decoder drivers assembling whole documents.

use alloc::vec;
use alloc::vec::Vec;

use thiserror::Error;

use crate::data::{DataError, DataMessage};
use crate::definition::{DefinitionError, DefinitionMessage, FieldDefinition};
use crate::header::{DocumentHeader, DocumentHeaderError, MessageKind, RecordHeader};

#[cfg(feature = "std")]
extern crate std;

/// Errors occurring while decoding a document.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the document.
    #[error("Unexpectedly reached the end of the document.")]
    UnexpectedEnd,
    /// Incorrect document header.
    #[error("Incorrect document header: {0}")]
    Header(#[from] DocumentHeaderError),
    /// Incorrect definition message.
    #[error("Incorrect definition message: {0}")]
    Definition(#[from] DefinitionError),
    /// Incorrect data message.
    #[error("Incorrect data message: {0}")]
    Data(#[from] DataError),
    /// A data record arrived before any definition for its slot.
    #[error("No definition registered for local message {0}.")]
    MissingDefinition(u8),
}

/// A forward-only supplier of document bytes.
///
/// Implementations must fill the requested buffer completely, looping over
/// short reads as necessary, and fail when the document ends first. The
/// supplier is owned by a single decode for its whole duration.
pub trait Source {
    /// Fill `buf` with the next bytes of the document.
    fn pull(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

impl Source for &[u8] {
    fn pull(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if self.len() < buf.len() {
            Err(Error::UnexpectedEnd)?;
        }

        let (bytes, rest) = self.split_at(buf.len());
        buf.copy_from_slice(bytes);
        *self = rest;

        Ok(())
    }
}

#[cfg(feature = "std")]
struct Reader<R>(R);

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for Reader<R> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.0.read_exact(buf).map_err(Error::Io)
    }
}

/// A fully decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: DocumentHeader,
    /// Every record of the data section, in stream order.
    pub records: Vec<Record>,
}

/// A single decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A definition message declaring the layout of a local message slot.
    Definition {
        header: RecordHeader,
        message: DefinitionMessage,
    },
    /// A data message decoded against a previously declared layout.
    Data {
        header: RecordHeader,
        message: DataMessage,
    },
}

impl Record {
    /// The record's leading header byte.
    pub fn header(&self) -> &RecordHeader {
        match self {
            Self::Definition { header, .. } => header,
            Self::Data { header, .. } => header,
        }
    }
}

/// Most recent definition declared for each local message slot.
///
/// A new definition replaces a slot's previous entry wholesale. The table
/// lives only as long as a single document decode.
#[derive(Default)]
struct Definitions([Option<DefinitionMessage>; 16]);

impl Definitions {
    fn declare(&mut self, local_message: u8, definition: DefinitionMessage) {
        self.0[local_message as usize] = Some(definition);
    }

    fn lookup(&self, local_message: u8) -> Result<&DefinitionMessage, Error> {
        self.0[local_message as usize]
            .as_ref()
            .ok_or(Error::MissingDefinition(local_message))
    }
}

/// Decode a document from a byte source.
///
/// Decoding ends once the number of record bytes declared by the document
/// header has been consumed; any trailing bytes (such as a file checksum)
/// are left unread. Running out of bytes before that point is an error,
/// and no partial document is returned.
pub fn decode(r: &mut impl Source) -> Result<Document, Error> {
    let i = &mut 0; // Counter of bytes read, used to end decoding.

    let mut header = DocumentHeader::decode(take(r, i)?)?;

    if header.is_extended() {
        header.extend(take(r, i)?);
    }

    let end = *i + header.data_size as usize; // Offset to the end of the record section.

    let mut definitions = Definitions::default();
    let mut records = Vec::new();

    while *i < end {
        let record_header = RecordHeader::decode(take(r, i)?);

        let record = match record_header.kind() {
            MessageKind::Definition => {
                let message = decode_definition(r, i, record_header.has_developer_data())?;
                definitions.declare(record_header.local_message(), message.clone());

                Record::Definition {
                    header: record_header,
                    message,
                }
            }
            MessageKind::Data => {
                let definition = definitions.lookup(record_header.local_message())?;

                let mut payload = vec![0; definition.data_size()];
                r.pull(&mut payload)?;
                *i += payload.len();

                Record::Data {
                    header: record_header,
                    message: DataMessage::decode(definition, &payload)?,
                }
            }
        };

        records.push(record);
    }

    Ok(Document { header, records })
}

fn decode_definition(
    r: &mut impl Source,
    i: &mut usize,
    developer: bool,
) -> Result<DefinitionMessage, Error> {
    let (mut message, count) = DefinitionMessage::decode(take(r, i)?);

    for _ in 0..count {
        message.fields.push(FieldDefinition::decode(take(r, i)?)?);
    }

    if developer {
        let [count] = take(r, i)?;

        for _ in 0..count {
            message.fields.push(FieldDefinition::decode_developer(take(r, i)?));
        }
    }

    Ok(message)
}

/// Take an exact number of bytes from a source, advancing a counter.
fn take<const N: usize>(r: &mut impl Source, i: &mut usize) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    r.pull(&mut buf)?;
    *i += N;

    Ok(buf)
}

/// Decode a document from a data slice.
///
/// This method is also re-exported as `pannier::decode_slice`.
pub fn decode_slice(mut r: &[u8]) -> Result<Document, Error> {
    decode(&mut r)
}

/// Decode a document from a reader.
///
/// This method is also re-exported as `pannier::decode_reader`.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn decode_reader(r: &mut impl std::io::Read) -> Result<Document, Error> {
    decode(&mut Reader(r))
}
