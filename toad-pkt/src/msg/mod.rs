use toad_macros::rfc_7252_doc;

/// Message Code
pub mod code;

/// Parse & build errors
pub mod error;

/// Message Header
pub mod header;

/// Message ID
pub mod id;

/// Message Options
pub mod opt;

/// Message Type
pub mod ty;

/// Message Token
pub mod token;

/// Message Version
pub mod ver;

pub use code::*;
pub use error::*;
pub use header::*;
pub use id::*;
pub use opt::*;
pub use token::*;
pub use ty::*;
pub use ver::*;

use crate::from_bytes::{Reader, TryConsumeBytes};
use crate::TryFromBytes;

/// Byte separating the options from the payload
pub const PAYLOAD_MARKER: u8 = 0xFF;

#[doc = rfc_7252_doc!("5.5")]
///
/// # `Payload` struct
/// Borrowed from the packet buffer. A packet whose payload marker
/// is not followed by at least one byte has an empty (absent) payload.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Payload<'a>(pub &'a [u8]);

impl<'a> Payload<'a> {
  /// Whether the packet has no payload
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

/// # `Packet` struct
/// Low-level representation of a message, borrowing its token, option values
/// and payload from the buffer it was parsed from (or from the caller, when building).
///
/// Because of this the packet can never outlive the buffer; nothing is copied
/// or allocated while parsing or building.
///
/// Packets support both serializing to bytes and from bytes, by using the provided [`TryFromBytes`] and [`crate::TryIntoBytes`] traits.
///
/// <details>
/// <summary><b>RFC7252 - CoAP Messaging Model</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("2.1"))]
/// </details>
/// <details>
/// <summary><b>RFC7252 - CoAP Message Binary Format</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("3"))]
/// </details>
///
/// ```
/// use toad_pkt::*;
///
/// # //                   version  token len  code (2.05 Content)
/// # //                   |        |          /
/// # //                   |  type  |         /  message ID
/// # //                   |  |     |        |   |
/// # //                   vv vv vvvv vvvvvvvv vvvvvvvvvvvvvvvv
/// let bytes: &[u8] = &[0b_01_10_0010, 0x45, 0x00, 0x01, // header
///                      0x55, 0x9D, // token
///                      0xC0, // Content-Format (no value)
///                      0xFF, b'w', b'o', b'r', b'l', b'd'];
///
/// let pkt = Packet::try_from_bytes(bytes).unwrap();
///
/// assert_eq!(pkt.header.ty, Type::Ack);
/// assert_eq!(pkt.header.code, Code::CONTENT);
/// assert_eq!(pkt.token, Token(&[0x55, 0x9D]));
/// assert_eq!(pkt.find_options(known::CONTENT_FORMAT).len(), 1);
/// assert_eq!(pkt.payload, Payload(b"world"));
/// ```
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Packet<'a> {
  /// see [`Header`] for details
  pub header: Header,
  /// see [`Token`] for details
  pub token: Token<'a>,
  /// see [`Opts`] for details
  pub opts: Opts<'a>,
  /// see [`Payload`]
  pub payload: Payload<'a>,
}

impl<'a> Packet<'a> {
  /// Create a packet with no token, options or payload
  pub fn new(ty: Type, code: Code, id: Id) -> Self {
    Self { header: Header::new(ty, code, id),
           ..Default::default() }
  }

  /// Parse a packet, choosing what happens when it carries
  /// more than [`MAX_OPTS`] options.
  ///
  /// [`TryFromBytes::try_from_bytes`] is this with [`OptOverflow::Truncate`].
  ///
  /// ```
  /// use toad_pkt::{Error, OptOverflow, Packet, MAX_OPTS};
  ///
  /// let mut bytes = vec![0x40, 0x01, 0x00, 0x01];
  /// bytes.extend([0x10; MAX_OPTS + 1]);
  ///
  /// assert_eq!(Packet::parse_with(&bytes, OptOverflow::Truncate).map(|p| p.opts.len()),
  ///            Ok(MAX_OPTS));
  /// assert_eq!(Packet::parse_with(&bytes, OptOverflow::Reject),
  ///            Err(Error::TooManyOptions));
  /// ```
  pub fn parse_with(bytes: &'a [u8], overflow: OptOverflow) -> Result<Self, Error> {
    let mut bytes = Reader::new(bytes);

    let header = Header::try_consume_bytes(&mut bytes)?;
    let token = Token::parse(&header, &mut bytes)?;
    let opts = Opts::try_consume_bytes(&mut bytes, overflow)?;

    let payload = match bytes.next() {
      | Some(PAYLOAD_MARKER) => Payload(bytes.until_end()),
      | _ => Payload(&[]),
    };

    Ok(Packet { header,
                token,
                opts,
                payload })
  }

  /// Create a piggybacked response: an ACK with the given code & id
  /// echoing `token`, carrying `content` as its payload.
  ///
  /// When `content_format` is given, the response gets a `Content-Format`
  /// option whose 2-byte value is written to `scratch`, which must then
  /// outlive the response.
  ///
  /// ```
  /// use toad_pkt::*;
  ///
  /// let req = Packet::try_from_bytes(&[0x41, 0x01, 0x12, 0x34, 0xAB]).unwrap();
  ///
  /// let mut scratch = [0u8; 2];
  /// let rep = Packet::response(&mut scratch,
  ///                            b"22.5C",
  ///                            req.header.id,
  ///                            req.token,
  ///                            Code::CONTENT,
  ///                            Some(ContentFormat::Text)).unwrap();
  ///
  /// let mut buf = [0u8; 32];
  /// let n = rep.try_into_bytes(&mut buf).unwrap();
  /// assert_eq!(&buf[..n],
  ///            &[0x61, 0x45, 0x12, 0x34, 0xAB, 0xC2, 0x00, 0x00, 0xFF, b'2', b'2', b'.', b'5', b'C']);
  /// ```
  pub fn response(scratch: &'a mut [u8],
                  content: &'a [u8],
                  id: Id,
                  token: Token<'a>,
                  code: Code,
                  content_format: Option<ContentFormat>)
                  -> Result<Self, Error> {
    let mut rep = Self::new(Type::Ack, code, id);
    rep.set_token(token.0);
    rep.set_payload(content);

    if let Some(format) = content_format {
      let value = scratch.get_mut(..2).ok_or(Error::BufferTooSmall)?;
      value.copy_from_slice(&format.bytes());
      let value: &'a [u8] = value;

      rep.add_option(known::CONTENT_FORMAT, value)?;
    }

    Ok(rep)
  }

  /// Set the token, updating the header's token length to match
  pub fn set_token(&mut self, token: &'a [u8]) {
    self.header.tkl = u8::try_from(token.len()).unwrap_or(u8::MAX);
    self.token = Token(token);
  }

  /// Add an option, failing with [`Error::TooManyOptions`]
  /// if the packet already has [`MAX_OPTS`] options.
  ///
  /// Options may be added in any order; options with the same number
  /// are written in the order they were added.
  pub fn add_option(&mut self, number: OptNumber, value: &'a [u8]) -> Result<(), Error> {
    self.opts.push(number, OptValue(value))
  }

  /// Set the payload
  pub fn set_payload(&mut self, payload: &'a [u8]) {
    self.payload = Payload(payload);
  }

  /// Get the first option with a given number, along with every
  /// option directly following it with the same number.
  ///
  /// See [`Opts::find`]
  pub fn find_options(&self, number: OptNumber) -> &[Opt<'a>] {
    self.opts.find(number)
  }

  /// Decode the first [`known::BLOCK1`] or [`known::BLOCK2`] option
  ///
  /// ```
  /// use toad_pkt::*;
  ///
  /// let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  /// pkt.add_option(known::BLOCK2, &[0x6C]).unwrap();
  ///
  /// let block = pkt.block(known::BLOCK2).unwrap().unwrap();
  /// assert_eq!(block.num(), 6);
  /// assert!(pkt.block(known::BLOCK1).is_none());
  /// ```
  pub fn block(&self, number: OptNumber) -> Option<Result<Block, Error>> {
    self.find_options(number)
        .first()
        .map(|opt| Block::from_bytes(opt.value.0))
  }
}

impl<'a> TryFromBytes<'a> for Packet<'a> {
  type Error = Error;

  fn try_from_bytes(bytes: &'a [u8]) -> Result<Self, Self::Error> {
    Self::parse_with(bytes, OptOverflow::default())
  }
}
