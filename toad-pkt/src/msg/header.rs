use super::{Code, Error, Id, Type, Version};
use crate::byte_order;
use crate::from_bytes::{Reader, TryConsumeBytes};
use crate::to_bytes::Writer;

/// Length of the fixed header at the start of every message
pub const HEADER_LEN: usize = 4;

/// The fixed 4-byte message header.
///
/// ```text
/// CoAP version
/// |
/// |  Message type (request, response, empty)
/// |  |
/// |  |  Length of token, in bytes. (4-bit integer)
/// |  |  |
/// |  |  |    Message code   Message ID
/// |  |  |    |              |
/// vv vv vvvv vvvvvvvv vvvvvvvvvvvvvvvv
/// 01 00 0000 00000000 0000000000000000
/// ```
///
/// See [RFC7252 - Message Format](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Header {
  /// see [`Version`] for details
  pub ver: Version,
  /// see [`Type`] for details
  pub ty: Type,
  /// Length of the token, in bytes.
  ///
  /// Only 0 through 8 are valid, even though the wire field is 4 bits wide.
  pub tkl: u8,
  /// see [`Code`] for details
  pub code: Code,
  /// see [`Id`] for details
  pub id: Id,
}

impl Header {
  /// Create a version 1 header with no token
  ///
  /// ```
  /// use toad_pkt::{Code, Header, Id, Type, Version};
  ///
  /// let hdr = Header::new(Type::Con, Code::GET, Id(5));
  /// assert_eq!(hdr.ver, Version(1));
  /// assert_eq!(hdr.tkl, 0);
  /// ```
  pub fn new(ty: Type, code: Code, id: Id) -> Self {
    Self { ver: Version(1),
           ty,
           tkl: 0,
           code,
           id }
  }

  pub(crate) fn write(&self, bytes: &mut Writer<'_>) -> Result<(), Error> {
    if !self.ver.is_supported() {
      return Err(Error::VersionNotOne);
    }

    let byte1 = (self.ver.0 & 0b11) << 6 | u8::from(self.ty) << 4 | (self.tkl & 0b1111);

    bytes.put(byte1)?;
    bytes.put(self.code.0)?;
    bytes.put_u16(self.id.0)
  }
}

impl<'a> TryConsumeBytes<'a> for Header {
  type Error = Error;

  fn try_consume_bytes(bytes: &mut Reader<'a>) -> Result<Self, Self::Error> {
    let hdr = bytes.take_exact(HEADER_LEN).ok_or(Error::HeaderTooShort)?;

    let ver = Version(hdr[0] >> 6);
    if !ver.is_supported() {
      return Err(Error::VersionNotOne);
    }

    let id = byte_order::read_u16(&hdr[2..]).ok_or(Error::HeaderTooShort)?;

    Ok(Header { ver,
                ty: Type::from_bits(hdr[0] >> 4),
                tkl: hdr[0] & 0b1111,
                code: Code(hdr[1]),
                id: Id(id) })
  }
}
