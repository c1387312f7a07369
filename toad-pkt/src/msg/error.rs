/// Errors encounterable while parsing a packet from bytes
/// or serializing one into a buffer.
///
/// All errors are terminal for the parse / build that raised them;
/// after a failed build the contents of the destination buffer
/// are unspecified and must not be sent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
  /// Input was shorter than the fixed 4-byte header
  HeaderTooShort,

  /// Version field was not `1` (while parsing or building)
  VersionNotOne,

  /// Token length was 9-15, or the buffer ended before the token did
  TokenTooShort,

  /// Token length in the header was > 8 (build)
  TokenTooLong,

  /// Token length in the header did not match the length of the token (build)
  TokenLengthMismatch,

  /// Buffer ended in an option's header or extension bytes
  OptionTooShortForHeader,

  /// Option Delta nibble was set to the reserved value 15,
  /// or a delta too large to encode was requested
  OptionDeltaInvalid,

  /// Value Length nibble was set to the reserved value 15,
  /// or a value too long to encode was requested
  OptionLenInvalid,

  /// Option value length overruns the buffer
  OptionTooBig,

  /// More options than [`crate::MAX_OPTS`] were added or
  /// (with [`crate::OptOverflow::Reject`]) present on the wire
  TooManyOptions,

  /// Output buffer too small for the packet being built
  BufferTooSmall,

  /// Block SZX > 6 or block NUM >= 2^20
  UnsupportedBlockParams,
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    use Error::*;

    let msg = match self {
      | HeaderTooShort => "packet shorter than 4 byte header",
      | VersionNotOne => "version field is not 1",
      | TokenTooShort => "token length invalid or token overruns packet",
      | TokenTooLong => "token length greater than 8",
      | TokenLengthMismatch => "token length does not match header",
      | OptionTooShortForHeader => "packet ended inside option header",
      | OptionDeltaInvalid => "option delta invalid",
      | OptionLenInvalid => "option length invalid",
      | OptionTooBig => "option value overruns packet",
      | TooManyOptions => "too many options",
      | BufferTooSmall => "output buffer too small",
      | UnsupportedBlockParams => "unsupported block size or number",
    };

    f.write_str(msg)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(Error::HeaderTooShort.to_string(),
               "packet shorter than 4 byte header");
    assert_eq!(Error::UnsupportedBlockParams.to_string(),
               "unsupported block size or number");
  }

  #[test]
  fn is_std_error() {
    fn takes_err(_: &dyn std::error::Error) {}
    takes_err(&Error::BufferTooSmall);
  }
}
