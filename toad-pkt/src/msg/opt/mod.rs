use tinyvec::ArrayVec;
use toad_macros::rfc_7252_doc;

use super::{Error, PAYLOAD_MARKER};
use crate::byte_order;
use crate::from_bytes::Reader;
use crate::to_bytes::{opt_len_or_delta, Writer};

/// Well-known option numbers & option value formats
pub mod known;

/// Stable ordering of options by number
pub mod order;

pub use known::{Block, BlockSize, ContentFormat};

/// Maximum number of options a [`crate::Packet`] can hold
pub const MAX_OPTS: usize = 16;

/// What the parser should do when a packet carries more
/// than [`MAX_OPTS`] options
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub enum OptOverflow {
  /// Keep the first [`MAX_OPTS`] options and stop reading.
  ///
  /// The rest of the options are not validated and the
  /// packet is considered to have no payload.
  #[default]
  Truncate,
  /// Fail with [`Error::TooManyOptions`]
  Reject,
}

#[doc = rfc_7252_doc!("5.4")]
/// <details><summary><b>RFC7252 Section 3.1 Option binary format</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("3.1"))]
/// </details>
///
/// # `Opt` struct
/// An option with its number already resolved from the
/// running sum of deltas, and a value borrowed from the packet buffer.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct Opt<'a> {
  /// See [`OptNumber`]
  pub number: OptNumber,
  /// See [`OptValue`]
  pub value: OptValue<'a>,
}

#[doc = rfc_7252_doc!("5.4.6")]
/// <details><summary><b>RFC7252 Section 12.2 Core CoAP Option Numbers</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("12.2"))]
/// </details>
///
/// # `OptNumber` struct
/// On the wire, options only carry the difference ("delta") between
/// their number and the previous option's; parsing sums these deltas
/// so that every [`Opt`] knows its own number.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct OptNumber(pub u32);

#[doc = rfc_7252_doc!("5.4.1")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionMustBeProcessed {
  /// This option must be processed,
  /// and a response that ignores it
  /// will be rejected.
  ///
  /// Corresponds to the option being "critical"
  /// in strict CoAP terms
  Yes,
  /// This option does not _need_ to
  /// be processed,
  /// and a response that ignores it
  /// will be processed anyway.
  ///
  /// Corresponds to the option being "elective"
  /// in strict CoAP terms
  No,
}

#[doc = rfc_7252_doc!("5.4.2")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WhenOptionUnsupportedByProxy {
  /// This option /must be/ processed & understood by proxies
  /// and may not be forwarded blindly to their destination.
  ///
  /// Corresponds to the option being "UnSafe" to forward
  /// in strict CoAP terms
  Error,
  /// This option may not be processed & understood by proxies
  /// and may be forwarded blindly to their destination.
  ///
  /// Corresponds to the option being "SafeToForward"
  /// in strict CoAP terms
  Forward,
}

#[doc = rfc_7252_doc!("5.4.2")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WhenOptionChanges {
  /// If this option is safe to forward,
  /// but unknown to a proxy, it should be included in the proxy's
  /// cache key for this message.
  ///
  /// Corresponds to the option being not "NoCacheKey"
  /// in strict CoAP terms
  ResponseChanges,
  /// If this option is safe to forward,
  /// but unknown to a proxy, it should not be included in the proxy's
  /// cache key for this message, and different values for this option
  /// should yield the cached response.
  ///
  /// Corresponds to the option being "NoCacheKey"
  /// in strict CoAP terms
  ResponseDoesNotChange,
}

impl OptNumber {
  /// Whether or not this option may be ignored by a server
  pub fn must_be_processed(&self) -> OptionMustBeProcessed {
    match self.0 & 0b1 {
      | 1 => OptionMustBeProcessed::Yes,
      | _ => OptionMustBeProcessed::No,
    }
  }

  /// Whether or not this option may be forwarded blindly by
  /// a proxy that does not support processing it
  pub fn when_unsupported_by_proxy(&self) -> WhenOptionUnsupportedByProxy {
    match (self.0 & 0b10) >> 1 {
      | 1 => WhenOptionUnsupportedByProxy::Error,
      | _ => WhenOptionUnsupportedByProxy::Forward,
    }
  }

  /// Whether or not different values for this option should
  /// yield proxies' cached response
  ///
  /// _(when the proxy does not support processing it and
  /// the option is safe to forward)_
  pub fn when_option_changes(&self) -> WhenOptionChanges {
    match (self.0 & 0b11100) >> 2 {
      | 0b111 => WhenOptionChanges::ResponseDoesNotChange,
      | _ => WhenOptionChanges::ResponseChanges,
    }
  }
}

#[doc = rfc_7252_doc!("3.2")]
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct OptValue<'a>(pub &'a [u8]);

impl<'a> OptValue<'a> {
  /// View this value as a UTF-8 string, e.g. for `Uri-Path` segments
  ///
  /// ```
  /// use toad_pkt::OptValue;
  ///
  /// assert_eq!(OptValue(b"temp").as_str(), Some("temp"));
  /// assert_eq!(OptValue(&[0xFF]).as_str(), None);
  /// ```
  pub fn as_str(&self) -> Option<&'a str> {
    core::str::from_utf8(self.0).ok()
  }
}

/// Decode an option delta or value length nibble, consuming
/// its extension bytes (if any) from the reader.
fn parse_opt_len_or_delta(nibble: u8,
                          bytes: &mut Reader<'_>,
                          reserved_err: Error)
                          -> Result<u32, Error> {
  match nibble {
    | 13 => bytes.next()
                 .map(|n| u32::from(n) + 13)
                 .ok_or(Error::OptionTooShortForHeader),
    | 14 => bytes.take_exact(2)
                 .and_then(byte_order::read_u16)
                 .map(|n| u32::from(n) + 269)
                 .ok_or(Error::OptionTooShortForHeader),
    | 15 => Err(reserved_err),
    | n => Ok(u32::from(n)),
  }
}

impl<'a> Opt<'a> {
  /// Parse one option whose delta is relative to `prev`
  pub(crate) fn try_consume_bytes(bytes: &mut Reader<'a>, prev: OptNumber) -> Result<Self, Error> {
    let head = bytes.next().ok_or(Error::OptionTooShortForHeader)?;

    // delta extension bytes come before length extension bytes
    let delta = parse_opt_len_or_delta(head >> 4, bytes, Error::OptionDeltaInvalid)?;
    let len = parse_opt_len_or_delta(head & 0b1111, bytes, Error::OptionLenInvalid)?;

    let value = bytes.take_exact(len as usize).ok_or(Error::OptionTooBig)?;

    Ok(Opt { number: OptNumber(prev.0 + delta),
             value: OptValue(value) })
  }

  /// Write this option with its delta relative to `prev`
  pub(crate) fn write(&self, prev: OptNumber, bytes: &mut Writer<'_>) -> Result<(), Error> {
    let delta = self.number
                    .0
                    .checked_sub(prev.0)
                    .ok_or(Error::OptionDeltaInvalid)?;
    let len = u32::try_from(self.value.0.len()).map_err(|_| Error::OptionLenInvalid)?;

    let (del, del_bytes) = opt_len_or_delta(delta, Error::OptionDeltaInvalid)?;
    let (len, len_bytes) = opt_len_or_delta(len, Error::OptionLenInvalid)?;

    bytes.put(del << 4 | len)?;

    if let Some(bs) = del_bytes {
      bytes.put_slice(&bs)?;
    }

    if let Some(bs) = len_bytes {
      bytes.put_slice(&bs)?;
    }

    bytes.put_slice(self.value.0)
  }
}

/// Fixed-capacity collection of up to [`MAX_OPTS`] options.
///
/// Options parsed from the wire are in wire order (ascending by number,
/// repeated options contiguous). Options added by hand may be in any
/// order; they are stably sorted by number when the packet is built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Opts<'a>(ArrayVec<[Opt<'a>; MAX_OPTS]>);

impl<'a> Opts<'a> {
  /// Create an empty collection
  pub fn new() -> Self {
    Self::default()
  }

  /// Append an option, failing with [`Error::TooManyOptions`] when full
  ///
  /// ```
  /// use toad_pkt::{known, Error, OptValue, Opts, MAX_OPTS};
  ///
  /// let mut opts = Opts::new();
  /// (0..MAX_OPTS).for_each(|_| opts.push(known::URI_PATH, OptValue(b"a")).unwrap());
  ///
  /// assert_eq!(opts.push(known::URI_PATH, OptValue(b"a")),
  ///            Err(Error::TooManyOptions));
  /// ```
  pub fn push(&mut self, number: OptNumber, value: OptValue<'a>) -> Result<(), Error> {
    match self.0.try_push(Opt { number, value }) {
      | None => Ok(()),
      | Some(_) => Err(Error::TooManyOptions),
    }
  }

  /// Number of options
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether there are no options
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Whether there is no room for more options
  pub fn is_full(&self) -> bool {
    self.0.len() >= MAX_OPTS
  }

  /// The options, in their current order
  pub fn as_slice(&self) -> &[Opt<'a>] {
    self.0.as_slice()
  }

  /// Iterate over the options in their current order
  pub fn iter(&self) -> core::slice::Iter<'_, Opt<'a>> {
    self.0.iter()
  }

  /// Find the run of options with a given number.
  ///
  /// Yields the first option with that number along with every option
  /// immediately following it that shares the number, or an empty slice
  /// if there are none. Relies on options being grouped by number,
  /// which is always true of parsed packets.
  ///
  /// ```
  /// use toad_pkt::{known, OptValue, Opts};
  ///
  /// let mut opts = Opts::new();
  /// opts.push(known::URI_PATH, OptValue(b"sensors")).unwrap();
  /// opts.push(known::URI_PATH, OptValue(b"temp")).unwrap();
  /// opts.push(known::URI_QUERY, OptValue(b"unit=c")).unwrap();
  ///
  /// let path = opts.find(known::URI_PATH);
  /// assert_eq!(path.len(), 2);
  /// assert_eq!(path[1].value, OptValue(b"temp"));
  /// assert!(opts.find(known::ACCEPT).is_empty());
  /// ```
  pub fn find(&self, number: OptNumber) -> &[Opt<'a>] {
    let opts = self.as_slice();

    match opts.iter().position(|o| o.number == number) {
      | Some(start) => {
        let run = opts[start..].iter()
                               .take_while(|o| o.number == number)
                               .count();
        &opts[start..start + run]
      },
      | None => &[],
    }
  }

  /// Stably sort the options by ascending number
  pub fn sort(&mut self) {
    order::sort(self.0.as_mut_slice())
  }

  /// Parse options until the end of the buffer, the payload marker,
  /// or [`MAX_OPTS`] options have been read.
  pub(crate) fn try_consume_bytes(bytes: &mut Reader<'a>,
                                  overflow: OptOverflow)
                                  -> Result<Self, Error> {
    let mut opts = Opts::new();
    let mut number = OptNumber(0);

    loop {
      match bytes.peek() {
        | None | Some(PAYLOAD_MARKER) => break Ok(opts),
        | Some(_) if opts.is_full() => match overflow {
          | OptOverflow::Truncate => {
            log::warn!("packet has more than {} options; ignoring the rest and any payload",
                       MAX_OPTS);
            break Ok(opts);
          },
          | OptOverflow::Reject => break Err(Error::TooManyOptions),
        },
        | Some(_) => {
          let opt = Opt::try_consume_bytes(bytes, number)?;
          number = opt.number;
          opts.0.push(opt);
        },
      }
    }
  }

  /// Write the options in ascending order of number, without
  /// reordering `self`.
  pub(crate) fn write(&self, bytes: &mut Writer<'_>) -> Result<(), Error> {
    let mut sorted = self.0;
    order::sort(sorted.as_mut_slice());

    sorted.iter()
          .try_fold(OptNumber(0), |prev, opt| {
            opt.write(prev, bytes)?;
            Ok(opt.number)
          })
          .map(|_| ())
  }
}

impl<'a, 'b> IntoIterator for &'b Opts<'a> {
  type Item = &'b Opt<'a>;
  type IntoIter = core::slice::Iter<'b, Opt<'a>>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
