//! X.509 certificate handling built on the [DER walker](crate::asn1).
//!
//! A certificate is stored as its DER bytes and navigated structurally on
//! demand. Only the validity window is interpreted here; issuer and subject
//! stay available to callers through the raw [`Tlv`] tree.

use {
    crate::{
        asn1::{self, Asn1Error, TagClass, Tlv},
        pem::{self, PemError},
    },
    chrono::{DateTime, NaiveDate, Utc},
    std::{error, fmt, fs, io, path::Path},
};

/// Universal tag number of the UTCTime type.
const TAG_UTC_TIME: u32 = 23;

/// Universal tag number of the GeneralizedTime type.
const TAG_GENERALIZED_TIME: u32 = 24;

/// An X.509 certificate, optionally paired with a private key.
///
/// The key is carried as opaque bytes for callers that need to hand the
/// pair onward together; nothing in this library interprets it.
#[derive(Debug, Clone)]
pub struct Certificate {
    der: Vec<u8>,
    private_key: Option<Vec<u8>>,
}

impl Certificate {
    /// Build a certificate from PEM or DER bytes.
    ///
    /// The data is decoded and parsed eagerly, so a value of this type
    /// always holds structurally valid DER.
    pub fn from_bytes(
        certificate: &[u8],
        private_key: Option<&[u8]>,
    ) -> Result<Self, CertificateError> {
        let der = pem::extract_der(certificate)?;
        let records = asn1::parse_der(&der)?;
        if records.is_empty() {
            return Err(CertificateError::Structure("certificate data is empty"));
        }
        Ok(Self {
            der,
            private_key: private_key.map(<[u8]>::to_vec),
        })
    }

    /// Read a certificate, and optionally its private key, from disk.
    pub fn load(
        certificate_path: impl AsRef<Path>,
        private_key_path: Option<&Path>,
    ) -> Result<Self, CertificateError> {
        let certificate = fs::read(certificate_path)?;
        let private_key = match private_key_path {
            Some(path) => Some(fs::read(path)?),
            None => None,
        };
        Self::from_bytes(&certificate, private_key.as_deref())
    }

    /// The DER bytes of the certificate.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// The private key bytes, if one was supplied.
    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_deref()
    }

    /// Parse the certificate into its TLV tree.
    pub fn tree(&self) -> Result<Vec<Tlv<'_>>, Asn1Error> {
        asn1::parse_der(&self.der)
    }

    /// The validity window of the certificate: `(not_before, not_after)`.
    ///
    /// The Validity element sits inside the tbsCertificate sequence between
    /// the signature algorithm and the subject name. Rather than counting
    /// fields, which shifts when the optional version marker is present, it
    /// is located structurally: it is the only child of tbsCertificate that
    /// is a constructed record holding exactly two time primitives.
    pub fn validity(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), CertificateError> {
        let tree = self.tree()?;
        let root = tree
            .first()
            .ok_or(CertificateError::Structure("certificate data is empty"))?;
        let tbs = root
            .children
            .first()
            .filter(|tbs| tbs.constructed)
            .ok_or(CertificateError::Structure("missing tbsCertificate"))?;
        let validity = tbs
            .children
            .iter()
            .find(|node| {
                node.constructed
                    && node.children.len() == 2
                    && node.children.iter().all(is_time)
            })
            .ok_or(CertificateError::Structure("missing validity element"))?;
        let not_before = decode_time(&validity.children[0])?;
        let not_after = decode_time(&validity.children[1])?;
        Ok((not_before, not_after))
    }

    /// Whether the certificate is outside its validity window at the given
    /// instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Result<bool, CertificateError> {
        let (not_before, not_after) = self.validity()?;
        Ok(now < not_before || now > not_after)
    }

    /// Whether the certificate is outside its validity window right now.
    pub fn is_expired(&self) -> Result<bool, CertificateError> {
        self.is_expired_at(Utc::now())
    }
}

fn is_time(node: &Tlv<'_>) -> bool {
    !node.constructed
        && node.class == TagClass::Universal
        && (node.tag == TAG_UTC_TIME || node.tag == TAG_GENERALIZED_TIME)
}

/// Decode a UTCTime (`YYMMDDHHMMSSZ`) or GeneralizedTime
/// (`YYYYMMDDHHMMSSZ`) primitive.
///
/// Two-digit UTCTime years pivot at 50: values below it are in the 2000s,
/// the rest in the 1900s, as RFC 5280 prescribes.
fn decode_time(node: &Tlv<'_>) -> Result<DateTime<Utc>, CertificateError> {
    const MALFORMED: CertificateError = CertificateError::Structure("malformed time value");
    let (year, rest) = match node.tag {
        TAG_UTC_TIME if node.data.len() == 13 => {
            let year = decimal::<i32>(&node.data[..2]).ok_or(MALFORMED)?;
            let year = if year < 50 { 2000 + year } else { 1900 + year };
            (year, &node.data[2..])
        }
        TAG_GENERALIZED_TIME if node.data.len() == 15 => {
            (decimal::<i32>(&node.data[..4]).ok_or(MALFORMED)?, &node.data[4..])
        }
        _ => return Err(MALFORMED),
    };
    if rest[10] != b'Z' {
        return Err(MALFORMED);
    }
    let month = decimal::<u32>(&rest[..2]).ok_or(MALFORMED)?;
    let day = decimal::<u32>(&rest[2..4]).ok_or(MALFORMED)?;
    let hour = decimal::<u32>(&rest[4..6]).ok_or(MALFORMED)?;
    let minute = decimal::<u32>(&rest[6..8]).ok_or(MALFORMED)?;
    let second = decimal::<u32>(&rest[8..10]).ok_or(MALFORMED)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|datetime| datetime.and_utc())
        .ok_or(MALFORMED)
}

/// Parse a run of ASCII decimal digits.
fn decimal<T: TryFrom<u32>>(digits: &[u8]) -> Option<T> {
    let mut value = 0u32;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(digit - b'0');
    }
    T::try_from(value).ok()
}

/// Failure while decoding a certificate.
#[derive(Debug)]
pub enum CertificateError {
    /// The PEM armor could not be unwrapped.
    Pem(PemError),
    /// The DER encoding is malformed.
    Der(Asn1Error),
    /// The DER is well-formed but is not shaped like a certificate.
    Structure(&'static str),
    /// A file could not be read.
    Io(io::Error),
}

impl fmt::Display for CertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pem(e) => write!(f, "invalid pem: {e}"),
            Self::Der(e) => write!(f, "invalid der: {e}"),
            Self::Structure(what) => write!(f, "invalid certificate: {what}"),
            Self::Io(e) => write!(f, "cannot read certificate: {e}"),
        }
    }
}

impl error::Error for CertificateError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Pem(e) => Some(e),
            Self::Der(e) => Some(e),
            Self::Structure(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<PemError> for CertificateError {
    fn from(e: PemError) -> Self {
        Self::Pem(e)
    }
}

impl From<Asn1Error> for CertificateError {
    fn from(e: Asn1Error) -> Self {
        Self::Der(e)
    }
}

impl From<io::Error> for CertificateError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
