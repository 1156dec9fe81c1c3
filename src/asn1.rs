//! A walker for ASN.1 data in the distinguished encoding rules (DER).
//!
//! DER data is a stream of tag-length-value (TLV) records. A record is
//! either primitive, in which case its content is opaque bytes, or
//! constructed, in which case its content is itself a stream of TLV records.
//! The walker decodes a byte buffer into a tree of [`Tlv`] nodes without
//! interpreting any primitive content; callers that understand a schema
//! (such as X.509) navigate the tree themselves.
//!
//! The encoding is defined in ITU-T X.690.

use std::{error, fmt};

/// The class of a TLV tag, bits 8 and 7 of the leading tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl TagClass {
    fn from_tag_byte(byte: u8) -> Self {
        match (byte & 0xc0) >> 6 {
            0 => Self::Universal,
            1 => Self::Application,
            2 => Self::ContextSpecific,
            _ => Self::Private,
        }
    }
}

/// A single decoded TLV record.
///
/// `data` borrows from the buffer handed to [`parse_der`], which therefore
/// must outlive the tree. For a primitive record `data` is the content
/// octets; for a constructed record it spans the entire TLV including the
/// header, so the exact encoding can be re-emitted from the node. The
/// nested records of a constructed node are in `children`, in encoding
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub class: TagClass,
    pub constructed: bool,
    pub tag: u32,
    pub data: &'a [u8],
    pub children: Vec<Tlv<'a>>,
}

impl Tlv<'_> {
    /// The name X.680 gives the tag, for universal tags this library is
    /// likely to meet inside certificates.
    fn tag_name(&self) -> Option<&'static str> {
        if self.class != TagClass::Universal {
            return None;
        }
        Some(match self.tag {
            1 => "BOOLEAN",
            2 => "INTEGER",
            3 => "BIT STRING",
            4 => "OCTET STRING",
            5 => "NULL",
            6 => "OBJECT IDENTIFIER",
            12 => "UTF8String",
            16 => "SEQUENCE",
            17 => "SET",
            19 => "PrintableString",
            22 => "IA5String",
            23 => "UTCTime",
            24 => "GeneralizedTime",
            _ => return None,
        })
    }

    fn dump(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        match (self.tag_name(), self.class) {
            (Some(name), _) => f.write_str(name)?,
            (None, TagClass::Universal) => write!(f, "[UNIVERSAL {}]", self.tag)?,
            (None, TagClass::Application) => write!(f, "[APPLICATION {}]", self.tag)?,
            (None, TagClass::ContextSpecific) => write!(f, "[{}]", self.tag)?,
            (None, TagClass::Private) => write!(f, "[PRIVATE {}]", self.tag)?,
        }
        writeln!(f, ", {} bytes", self.data.len())?;
        for child in &self.children {
            child.dump(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Tlv<'_> {
    /// An indented dump of the tree, one record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f, 0)
    }
}

/// Decode a DER buffer into the list of TLV records it holds, in order,
/// each with its nested records attached.
pub fn parse_der(buf: &[u8]) -> Result<Vec<Tlv<'_>>, Asn1Error> {
    let mut records = Vec::new();
    let mut pos = 0;
    while pos < buf.len() {
        let begin = pos;

        // Leading tag byte. Low tag numbers live in its low five bits; all
        // five bits set means the tag number continues in the following
        // bytes, 7 bits each, high bit flagging continuation. X.509 never
        // uses the multi-byte form, but the walker records it faithfully.
        let first = buf[pos];
        pos += 1;
        let class = TagClass::from_tag_byte(first);
        let constructed = first & 0x20 != 0;
        let mut tag = u32::from(first & 0x1f);
        if tag == 0x1f {
            tag = 0;
            loop {
                let byte = *buf.get(pos).ok_or(Asn1Error::Truncated)?;
                pos += 1;
                tag = tag
                    .checked_mul(128)
                    .ok_or(Asn1Error::TagTooLarge)?
                    | u32::from(byte & 0x7f);
                if byte & 0x80 == 0 {
                    break;
                }
            }
        }

        // Length octets. A clear high bit means the byte is the length; a
        // set high bit means the low seven bits count the big-endian length
        // bytes that follow. DER has no indefinite lengths.
        let length_byte = *buf.get(pos).ok_or(Asn1Error::Truncated)?;
        pos += 1;
        let length = if length_byte & 0x80 != 0 {
            let count = usize::from(length_byte & 0x7f);
            if count == 0 {
                return Err(Asn1Error::IndefiniteLength);
            }
            if count > std::mem::size_of::<usize>() {
                return Err(Asn1Error::LengthTooLarge);
            }
            let mut length = 0usize;
            for _ in 0..count {
                let byte = *buf.get(pos).ok_or(Asn1Error::Truncated)?;
                pos += 1;
                length = length
                    .checked_mul(256)
                    .ok_or(Asn1Error::LengthTooLarge)?
                    | usize::from(byte);
            }
            length
        } else {
            usize::from(length_byte)
        };

        let content_end = pos.checked_add(length).ok_or(Asn1Error::LengthTooLarge)?;
        if content_end > buf.len() {
            return Err(Asn1Error::Truncated);
        }

        let (data, children) = if constructed {
            // A constructed record nests a full TLV stream, and its data
            // span covers the header so the record can be re-emitted
            // verbatim.
            (&buf[begin..content_end], parse_der(&buf[pos..content_end])?)
        } else {
            (&buf[pos..content_end], Vec::new())
        };
        records.push(Tlv {
            class,
            constructed,
            tag,
            data,
            children,
        });
        pos = content_end;
    }
    Ok(records)
}

/// Failure while decoding DER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asn1Error {
    /// A header or content span runs past the end of the buffer.
    Truncated,
    /// A multi-byte tag number does not fit in 32 bits.
    TagTooLarge,
    /// A length field does not fit in `usize`.
    LengthTooLarge,
    /// The indefinite length form, which DER forbids.
    IndefiniteLength,
}

impl fmt::Display for Asn1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => f.write_str("data ends in the middle of a TLV record"),
            Self::TagTooLarge => f.write_str("tag number does not fit in 32 bits"),
            Self::LengthTooLarge => f.write_str("length does not fit in a machine word"),
            Self::IndefiniteLength => f.write_str("indefinite lengths are not valid in DER"),
        }
    }
}

impl error::Error for Asn1Error {}
