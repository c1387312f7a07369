/// # Message Code
///
/// 8-bit unsigned integer, split into a 3-bit class (most significant bits)
/// and a 5-bit detail (least significant bits), documented as `c.dd`
/// where `c` is a digit from 0 to 7 and `dd` two digits from 00 to 31.
///
/// The byte is kept exactly as it appears on the wire, so any value
/// (including ones this crate has no name for) survives a parse / build round trip.
///
/// |class|meaning|
/// |---|---|
/// |`0`|Message is a request (or empty, for `0.00`)|
/// |`2`|Message is a success response|
/// |`4`|Message is a client error response|
/// |`5`|Message is a server error response|
///
/// ```
/// use toad_pkt::Code;
///
/// assert_eq!(Code::CONTENT, Code::new(2, 5));
/// assert_eq!(Code::CONTENT.to_string(), "2.05");
/// ```
///
/// See [RFC7252 - Code Registry](https://datatracker.ietf.org/doc/html/rfc7252#section-12.1) for context
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Code(pub u8);

/// Whether a code is for a request, response, or empty message
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CodeKind {
  /// A request code (0.xx)
  Request,
  /// A response code ([2-5].xx)
  Response,
  /// EMPTY (0.00)
  Empty,
}

impl Code {
  /// Create a new Code from a class and a detail
  ///
  /// ```
  /// use toad_pkt::Code;
  ///
  /// let content = Code::new(2, 05);
  /// assert_eq!(content.0, 69);
  /// ```
  pub const fn new(class: u8, detail: u8) -> Self {
    Self(((class & 0b111) << 5) | (detail & 0b11111))
  }

  /// The 3-bit class of this code
  pub const fn class(&self) -> u8 {
    self.0 >> 5
  }

  /// The 5-bit detail of this code
  pub const fn detail(&self) -> u8 {
    self.0 & 0b11111
  }

  /// Get whether this code is for a request, response, or empty message
  ///
  /// ```
  /// use toad_pkt::{Code, CodeKind};
  ///
  /// assert_eq!(Code::EMPTY.kind(), CodeKind::Empty);
  /// assert_eq!(Code::GET.kind(), CodeKind::Request);
  /// assert_eq!(Code::NOT_FOUND.kind(), CodeKind::Response);
  /// ```
  pub fn kind(&self) -> CodeKind {
    match (self.class(), self.detail()) {
      | (0, 0) => CodeKind::Empty,
      | (0, _) => CodeKind::Request,
      | _ => CodeKind::Response,
    }
  }

  /// Get the human string representation of a message code
  ///
  /// Returned as a `char` array to avoid needing an allocator.
  ///
  /// ```
  /// use toad_pkt::Code;
  ///
  /// let chars = Code::new(4, 4).to_human();
  /// assert_eq!(String::from_iter(chars), "4.04");
  /// ```
  pub fn to_human(&self) -> [char; 4] {
    let to_char = |d: u8| char::from(b'0' + d);
    [to_char(self.class()),
     '.',
     to_char(self.detail() / 10),
     to_char(self.detail() % 10)]
  }

  /// 0.00 Empty message
  pub const EMPTY: Self = Self::new(0, 0);
  /// 0.01 GET
  pub const GET: Self = Self::new(0, 1);
  /// 0.02 POST
  pub const POST: Self = Self::new(0, 2);
  /// 0.03 PUT
  pub const PUT: Self = Self::new(0, 3);
  /// 0.04 DELETE
  pub const DELETE: Self = Self::new(0, 4);

  /// 2.01 Created
  pub const CREATED: Self = Self::new(2, 1);
  /// 2.02 Deleted
  pub const DELETED: Self = Self::new(2, 2);
  /// 2.03 Valid
  pub const VALID: Self = Self::new(2, 3);
  /// 2.04 Changed
  pub const CHANGED: Self = Self::new(2, 4);
  /// 2.05 Content
  pub const CONTENT: Self = Self::new(2, 5);
  /// 2.31 Continue (RFC7959)
  pub const CONTINUE: Self = Self::new(2, 31);

  /// 4.00 Bad Request
  pub const BAD_REQUEST: Self = Self::new(4, 0);
  /// 4.01 Unauthorized
  pub const UNAUTHORIZED: Self = Self::new(4, 1);
  /// 4.02 Bad Option
  pub const BAD_OPTION: Self = Self::new(4, 2);
  /// 4.03 Forbidden
  pub const FORBIDDEN: Self = Self::new(4, 3);
  /// 4.04 Not Found
  pub const NOT_FOUND: Self = Self::new(4, 4);
  /// 4.05 Method Not Allowed
  pub const METHOD_NOT_ALLOWED: Self = Self::new(4, 5);
  /// 4.06 Not Acceptable
  pub const NOT_ACCEPTABLE: Self = Self::new(4, 6);
  /// 4.08 Request Entity Incomplete (RFC7959)
  pub const REQUEST_ENTITY_INCOMPLETE: Self = Self::new(4, 8);
  /// 4.12 Precondition Failed
  pub const PRECONDITION_FAILED: Self = Self::new(4, 12);
  /// 4.13 Request Entity Too Large
  pub const REQUEST_ENTITY_TOO_LARGE: Self = Self::new(4, 13);
  /// 4.15 Unsupported Content-Format
  pub const UNSUPPORTED_CONTENT_FORMAT: Self = Self::new(4, 15);

  /// 5.00 Internal Server Error
  pub const INTERNAL_SERVER_ERROR: Self = Self::new(5, 0);
  /// 5.01 Not Implemented
  pub const NOT_IMPLEMENTED: Self = Self::new(5, 1);
  /// 5.02 Bad Gateway
  pub const BAD_GATEWAY: Self = Self::new(5, 2);
  /// 5.03 Service Unavailable
  pub const SERVICE_UNAVAILABLE: Self = Self::new(5, 3);
  /// 5.04 Gateway Timeout
  pub const GATEWAY_TIMEOUT: Self = Self::new(5, 4);
  /// 5.05 Proxying Not Supported
  pub const PROXYING_NOT_SUPPORTED: Self = Self::new(5, 5);
}

impl core::fmt::Display for Code {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.to_human()
        .iter()
        .try_for_each(|c| core::fmt::Write::write_char(f, *c))
  }
}

impl From<u8> for Code {
  fn from(b: u8) -> Self {
    Code(b)
  }
}

impl From<Code> for u8 {
  fn from(code: Code) -> u8 {
    code.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_eqb;

  #[test]
  fn parse_code() {
    let code = Code::from(0b_010_00101u8);
    assert_eq!(code.class(), 2);
    assert_eq!(code.detail(), 5);
    assert_eq!(code, Code::CONTENT);
  }

  #[test]
  fn serialize_code() {
    let actual: u8 = Code::new(2, 5).into();
    assert_eqb!(actual, 0b_010_00101u8)
  }

  #[test]
  fn codes_match_wire_values() {
    assert_eq!(Code::GET.0, 0x01);
    assert_eq!(Code::DELETE.0, 0x04);
    assert_eq!(Code::CREATED.0, 0x41);
    assert_eq!(Code::CONTENT.0, 0x45);
    assert_eq!(Code::BAD_REQUEST.0, 0x80);
    assert_eq!(Code::NOT_ACCEPTABLE.0, 0x86);
    assert_eq!(Code::PRECONDITION_FAILED.0, 0x8C);
    assert_eq!(Code::REQUEST_ENTITY_TOO_LARGE.0, 0x8D);
    assert_eq!(Code::UNSUPPORTED_CONTENT_FORMAT.0, 0x8F);
    assert_eq!(Code::INTERNAL_SERVER_ERROR.0, 0xA0);
    assert_eq!(Code::PROXYING_NOT_SUPPORTED.0, 0xA5);
  }

  #[test]
  fn human() {
    assert_eq!(Code::CONTINUE.to_string(), "2.31");
    assert_eq!(Code::EMPTY.to_string(), "0.00");
    assert_eq!(Code(0xFF).to_string(), "7.31");
  }
}
