use tinyvec::ArrayVec;

use crate::*;

/// Trait allowing fallible serialization into a caller-supplied buffer
pub trait TryIntoBytes {
  /// Error type yielded if serialization fails
  type Error;

  /// Try to write `self` into `buf`, yielding the number of bytes written.
  ///
  /// On failure the contents of `buf` are unspecified.
  ///
  /// ```
  /// use toad_pkt::{Code, Id, Packet, TryIntoBytes, Type};
  ///
  /// let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  /// pkt.set_token(&[0xAB]);
  /// pkt.set_payload(b"hi");
  ///
  /// let mut buf = [0u8; 16];
  /// let n = pkt.try_into_bytes(&mut buf).unwrap();
  /// assert_eq!(&buf[..n], &[0x41, 0x01, 0x00, 0x01, 0xAB, 0xFF, b'h', b'i']);
  /// ```
  fn try_into_bytes(&self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Bounded writer over an output buffer; every write is
/// checked against the remaining capacity.
#[derive(Debug)]
pub(crate) struct Writer<'b> {
  buf: &'b mut [u8],
  pos: usize,
}

impl<'b> Writer<'b> {
  pub(crate) fn new(buf: &'b mut [u8]) -> Self {
    Self { buf, pos: 0 }
  }

  pub(crate) fn put(&mut self, b: u8) -> Result<(), Error> {
    let slot = self.buf.get_mut(self.pos).ok_or(Error::BufferTooSmall)?;
    *slot = b;
    self.pos += 1;
    Ok(())
  }

  pub(crate) fn put_slice(&mut self, bs: &[u8]) -> Result<(), Error> {
    let end = self.pos + bs.len();
    let dst = self.buf
                  .get_mut(self.pos..end)
                  .ok_or(Error::BufferTooSmall)?;
    dst.copy_from_slice(bs);
    self.pos = end;
    Ok(())
  }

  /// Write `n` in network byte order
  pub(crate) fn put_u16(&mut self, n: u16) -> Result<(), Error> {
    let dst = self.buf.get_mut(self.pos..).ok_or(Error::BufferTooSmall)?;
    crate::byte_order::write_u16(dst, n).ok_or(Error::BufferTooSmall)?;
    self.pos += 2;
    Ok(())
  }

  pub(crate) fn position(&self) -> usize {
    self.pos
  }
}

/// Largest value representable by an option delta / length nibble
/// and its extension bytes (`0xFFFF + 269`)
pub(crate) const MAX_EXTENDED: u32 = 65804;

/// Encode an option delta or value length into its 4-bit nibble
/// and 0, 1 or 2 extension bytes.
///
/// `too_big` is yielded for values above [`MAX_EXTENDED`].
pub(crate) fn opt_len_or_delta(val: u32,
                               too_big: Error)
                               -> Result<(u8, Option<ArrayVec<[u8; 2]>>), Error> {
  match val {
    | n if n > MAX_EXTENDED => Err(too_big),
    | n if n >= 269 => {
      let mut bytes = ArrayVec::new();
      bytes.extend(((n - 269) as u16).to_be_bytes());
      Ok((14, Some(bytes)))
    },
    | n if n >= 13 => {
      let mut bytes = ArrayVec::new();
      bytes.push((n - 13) as u8);
      Ok((13, Some(bytes)))
    },
    | n => Ok((n as u8, None)),
  }
}

impl<'a> TryIntoBytes for Packet<'a> {
  type Error = Error;

  fn try_into_bytes(&self, buf: &mut [u8]) -> Result<usize, Self::Error> {
    if buf.len() < HEADER_LEN + usize::from(self.header.tkl) {
      return Err(Error::BufferTooSmall);
    }

    let mut bytes = Writer::new(buf);

    self.header.write(&mut bytes)?;
    self.token.write(self.header.tkl, &mut bytes)?;
    self.opts.write(&mut bytes)?;

    if !self.payload.is_empty() {
      bytes.put(PAYLOAD_MARKER)?;
      bytes.put_slice(self.payload.0)?;
    }

    log::trace!("built {}b packet ({} opts, {}b payload)",
                bytes.position(),
                self.opts.len(),
                self.payload.0.len());

    Ok(bytes.position())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{assert_eqb, assert_eqb_iter};

  #[test]
  fn pkt() {
    let (pkt, expected) = test_pkt();
    let mut actual = [0u8; 64];
    let n = pkt.try_into_bytes(&mut actual).unwrap();
    assert_eqb_iter!(&actual[..n], expected);
  }

  #[test]
  fn nibbles() {
    let cases: [(u32, u8, Option<&[u8]>); 7] = [(0, 0, None),
                                                 (12, 12, None),
                                                 (13, 13, Some(&[0])),
                                                 (268, 13, Some(&[255])),
                                                 (269, 14, Some(&[0, 0])),
                                                 (300, 14, Some(&[0, 31])),
                                                 (65804, 14, Some(&[255, 255]))];

    cases.into_iter().for_each(|(val, nibble, ext)| {
                       let (actual_nibble, actual_ext) =
                         opt_len_or_delta(val, Error::OptionLenInvalid).unwrap();
                       assert_eqb!(actual_nibble, nibble);
                       assert_eq!(actual_ext.as_ref().map(|e| e.as_slice()), ext);
                     });
  }

  #[test]
  fn nibble_too_big() {
    assert_eq!(opt_len_or_delta(65805, Error::OptionDeltaInvalid),
               Err(Error::OptionDeltaInvalid));
  }

  #[test]
  fn writer_checks_capacity() {
    let mut buf = [0u8; 3];
    let mut w = Writer::new(&mut buf);
    w.put(1).unwrap();
    assert_eq!(w.put_slice(&[2, 3, 4]), Err(Error::BufferTooSmall));
    w.put_slice(&[2, 3]).unwrap();
    assert_eq!(w.put(4), Err(Error::BufferTooSmall));
    assert_eq!(w.position(), 3);
    assert_eq!(buf, [1, 2, 3]);
  }

  #[test]
  fn writer_puts_u16() {
    let mut buf = [0u8; 3];
    let mut w = Writer::new(&mut buf);
    w.put_u16(0xBEEF).unwrap();
    assert_eq!(w.put_u16(1), Err(Error::BufferTooSmall));
    assert_eq!(w.position(), 2);
    assert_eq!(buf, [0xBE, 0xEF, 0]);
  }

  #[test]
  fn header_and_token_must_fit() {
    let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
    pkt.set_token(&[1, 2, 3]);

    let mut buf = [0u8; 6];
    assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::BufferTooSmall));
  }

  #[test]
  fn payload_must_fit() {
    let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
    pkt.set_payload(b"hello");

    let mut buf = [0u8; 9];
    assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::BufferTooSmall));

    let mut buf = [0u8; 10];
    assert_eq!(pkt.try_into_bytes(&mut buf), Ok(10));
  }

  #[test]
  fn no_payload_marker() {
    let pkt = Packet::new(Type::Con, Code::CONTENT, Id(0));
    let mut buf = [0u8; 8];
    let n = pkt.try_into_bytes(&mut buf).unwrap();

    assert_eq!(n, 4);
    assert_ne!(buf[..n].last(), Some(&0b11111111));
  }
}
