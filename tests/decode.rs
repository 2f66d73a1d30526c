use pannier::data::Value;
use pannier::definition::FieldKind;
use pannier::header::{MessageKind, RecordHeader};
use pannier::message::MessageCategory;
use pannier::{Error, Record, decode_reader, decode_slice};

/// Wrap a record section in a common twelve-byte document header.
fn document(records: &[u8]) -> Vec<u8> {
    let mut bytes = vec![12, 0x10, 0x08, 0x44];
    bytes.extend_from_slice(&(records.len() as u32).to_be_bytes());
    bytes.extend_from_slice(b".FIT");
    bytes.extend_from_slice(records);
    bytes
}

#[test]
fn empty_record_section() {
    let document = decode_slice(&document(&[])).unwrap();

    assert_eq!(document.header.data_size, 0);
    assert!(document.records.is_empty());
}

#[test]
fn extended_header_checksum_is_stored() {
    let mut bytes = vec![14, 0x10, 0x08, 0x44, 0, 0, 0, 0];
    bytes.extend_from_slice(b".FIT");
    bytes.extend_from_slice(&[0xCD, 0xAB]);

    let document = decode_slice(&bytes).unwrap();
    assert_eq!(document.header.checksum, Some(0xABCD));
    assert!(document.records.is_empty());
}

#[test]
fn truncated_extended_header() {
    // Fourteen bytes declared, twelve available.
    let mut bytes = vec![14, 0x10, 0x08, 0x44, 0, 0, 0, 0];
    bytes.extend_from_slice(b".FIT");

    assert!(matches!(decode_slice(&bytes), Err(Error::UnexpectedEnd)));
    assert!(matches!(
        decode_reader(&mut bytes.as_slice()),
        Err(Error::Io(_)),
    ));
}

#[test]
fn definition_then_data() {
    let records = [
        0x40, // Definition, local message zero.
        0, 1, 0, 20, 2, // Big-endian, global message twenty, two fields.
        253, 4, 0x86, // A four-byte uint32.
        3, 1, 0x02, // A one-byte uint8.
        0x00, // Data, local message zero.
        0, 0, 0, 100, 7,
    ];

    let document = decode_slice(&document(&records)).unwrap();
    assert_eq!(document.records.len(), 2);

    let Record::Definition { header, message } = &document.records[0] else {
        panic!("expected a definition record");
    };
    assert_eq!(header.kind(), MessageKind::Definition);
    assert_eq!(message.global_message, 20);
    assert_eq!(message.category, MessageCategory::Record);
    assert_eq!(message.fields.len(), 2);

    let Record::Data { header, message } = &document.records[1] else {
        panic!("expected a data record");
    };
    assert_eq!(header.local_message(), 0);
    assert_eq!(
        message.values,
        vec![Value::Unsigned(100), Value::Unsigned(7)],
    );
}

#[test]
fn data_before_definition_is_rejected() {
    assert!(matches!(
        decode_slice(&document(&[0x03])),
        Err(Error::MissingDefinition(3)),
    ));
}

#[test]
fn second_definition_replaces_first() {
    let records = [
        0x40, // Definition, local message zero.
        0, 1, 0, 20, 1, //
        0, 1, 0x02, // A one-byte uint8.
        0x00, // Data.
        5,    //
        0x40, // A second definition for the same slot.
        0, 1, 0, 20, 1, //
        0, 2, 0x84, // A two-byte uint16.
        0x00, // Data, now two bytes.
        1, 0,
    ];

    let document = decode_slice(&document(&records)).unwrap();
    assert_eq!(document.records.len(), 4);

    let Record::Data { message, .. } = &document.records[1] else {
        panic!("expected a data record");
    };
    assert_eq!(message.values, vec![Value::Unsigned(5)]);

    let Record::Data { message, .. } = &document.records[3] else {
        panic!("expected a data record");
    };
    assert_eq!(message.values, vec![Value::Unsigned(256)]);
}

#[test]
fn local_message_slots_are_independent() {
    let records = [
        0x40, // Definition, local message zero.
        0, 1, 0, 20, 1, //
        0, 1, 0x02, //
        0x42, // Definition, local message two.
        0, 1, 0, 20, 1, //
        0, 2, 0x84, //
        0x02, // Data, local message two.
        0, 9, //
        0x00, // Data, local message zero.
        3,
    ];

    let document = decode_slice(&document(&records)).unwrap();

    let Record::Data { message, .. } = &document.records[2] else {
        panic!("expected a data record");
    };
    assert_eq!(message.values, vec![Value::Unsigned(9)]);

    let Record::Data { message, .. } = &document.records[3] else {
        panic!("expected a data record");
    };
    assert_eq!(message.values, vec![Value::Unsigned(3)]);
}

#[test]
fn developer_fields_decode_as_bytes() {
    let records = [
        0x60, // Definition with developer data, local message zero.
        0, 1, 0, 20, 1, //
        1, 1, 0x02, // A one-byte uint8.
        1,    // One developer field description.
        7, 3, 0, // Three bytes for developer data index zero.
        0x00, // Data.
        42, 1, 2, 3,
    ];

    let document = decode_slice(&document(&records)).unwrap();

    let Record::Definition { message, .. } = &document.records[0] else {
        panic!("expected a definition record");
    };
    assert_eq!(message.fields.len(), 2);
    assert_eq!(message.fields[1].kind, FieldKind::Developer { data_index: 0 });

    let Record::Data { message, .. } = &document.records[1] else {
        panic!("expected a data record");
    };
    assert_eq!(
        message.values,
        vec![Value::Unsigned(42), Value::Bytes(vec![1, 2, 3])],
    );
}

#[test]
fn compressed_timestamp_headers_carry_data() {
    let records = [
        0x41, // Definition, local message one.
        0, 1, 0, 20, 1, //
        0, 1, 0x02, //
        0b1010_0101, // Compressed timestamp, local message one, offset five.
        9,
    ];

    let document = decode_slice(&document(&records)).unwrap();

    let Record::Data { header, message } = &document.records[1] else {
        panic!("expected a data record");
    };
    assert_eq!(
        header,
        &RecordHeader::CompressedTimestamp {
            local_message: 1,
            time_offset: 5,
        }
    );
    assert_eq!(header.kind(), MessageKind::Data);
    assert_eq!(message.values, vec![Value::Unsigned(9)]);
}

#[test]
fn zero_length_data_records() {
    let records = [
        0x40, // Definition with no fields.
        0, 1, 0, 20, 0, //
        0x00, // Data occupying only its header byte.
        0x00,
    ];

    let document = decode_slice(&document(&records)).unwrap();
    assert_eq!(document.records.len(), 3);

    let Record::Data { message, .. } = &document.records[1] else {
        panic!("expected a data record");
    };
    assert!(message.values.is_empty());
}

#[test]
fn trailing_bytes_are_ignored() {
    let records = [
        0x40, //
        0, 1, 0, 20, 1, //
        0, 1, 0x02, //
        0x00, //
        5,
    ];

    // A file checksum past the declared record section is left unread.
    let mut bytes = document(&records);
    bytes.extend_from_slice(&[0xFF, 0xFF]);

    let document = decode_slice(&bytes).unwrap();
    assert_eq!(document.records.len(), 2);
}

#[test]
fn premature_end_mid_record() {
    let mut bytes = vec![12, 0x10, 0x08, 0x44];
    bytes.extend_from_slice(&10u32.to_be_bytes());
    bytes.extend_from_slice(b".FIT");
    bytes.push(0x40); // A definition header, then nothing.

    assert!(matches!(decode_slice(&bytes), Err(Error::UnexpectedEnd)));
}

#[test]
fn reader_driver_matches_slice_driver() {
    let records = [
        0x40, //
        0, 1, 0, 20, 2, //
        253, 4, 0x86, //
        3, 1, 0x02, //
        0x00, //
        0, 0, 0, 100, 7,
    ];

    let bytes = document(&records);

    let from_slice = decode_slice(&bytes).unwrap();
    let from_reader = decode_reader(&mut bytes.as_slice()).unwrap();

    assert_eq!(from_slice, from_reader);
}
