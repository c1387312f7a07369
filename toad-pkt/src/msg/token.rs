use super::{Error, Header};
use crate::from_bytes::Reader;
use crate::to_bytes::Writer;

/// Largest valid token length
pub const MAX_TOKEN_LEN: u8 = 8;

/// # Message Token
///
/// The Token is used to match a response with a request.  The token
/// value is a sequence of 0 to 8 bytes.  (Note that every message
/// carries a token, even if it is of zero length.)  Every request
/// carries a client-generated token that the server MUST echo (without
/// modification) in any resulting response.
///
/// A token borrows from the buffer it was parsed from (or the caller's
/// storage, when building) and is never copied.
///
/// See [RFC7252 - Token](https://datatracker.ietf.org/doc/html/rfc7252#section-5.3.1) for context
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Token<'a>(pub &'a [u8]);

impl<'a> Token<'a> {
  /// Parse the token following the header, borrowing it from the reader's buffer.
  ///
  /// Fails with [`Error::TokenTooShort`] both when the header declares
  /// a token length of 9-15 and when the buffer ends before the token does.
  pub(crate) fn parse(header: &Header, bytes: &mut Reader<'a>) -> Result<Self, Error> {
    match header.tkl {
      | 0 => Ok(Token(&[])),
      | tkl if tkl <= MAX_TOKEN_LEN => bytes.take_exact(usize::from(tkl))
                                            .map(Token)
                                            .ok_or(Error::TokenTooShort),
      | _ => Err(Error::TokenTooShort),
    }
  }

  /// Write `tkl` bytes of token, checking `tkl` against the token itself.
  ///
  /// A token of nonzero length is ignored when `tkl` is 0.
  pub(crate) fn write(&self, tkl: u8, bytes: &mut Writer<'_>) -> Result<(), Error> {
    if tkl > MAX_TOKEN_LEN {
      return Err(Error::TokenTooLong);
    }

    if tkl == 0 {
      return Ok(());
    }

    if usize::from(tkl) != self.0.len() {
      return Err(Error::TokenLengthMismatch);
    }

    bytes.put_slice(self.0)
  }
}
