//! Network (big-endian) byte order helpers.
//!
//! Every multi-byte integer on the CoAP wire is big-endian:
//! the message ID, 2-byte option delta / length extensions
//! and uint option values such as Content-Format.
//!
//! Reads and writes are bounds-checked and yield `None`
//! rather than panicking when the slice is too short.

use byteorder::{ByteOrder, NetworkEndian};

/// Read a `u16` from the first 2 bytes of `bytes`
///
/// ```
/// use toad_pkt::byte_order::read_u16;
///
/// assert_eq!(read_u16(&[0xBE, 0xEF]), Some(0xBEEF));
/// assert_eq!(read_u16(&[0xBE]), None);
/// ```
pub fn read_u16(bytes: &[u8]) -> Option<u16> {
  bytes.get(..2).map(NetworkEndian::read_u16)
}

/// Read a `u32` from the first 4 bytes of `bytes`
pub fn read_u32(bytes: &[u8]) -> Option<u32> {
  bytes.get(..4).map(NetworkEndian::read_u32)
}

/// Read a `u64` from the first 8 bytes of `bytes`
pub fn read_u64(bytes: &[u8]) -> Option<u64> {
  bytes.get(..8).map(NetworkEndian::read_u64)
}

/// Write `n` into the first 2 bytes of `bytes`
///
/// ```
/// use toad_pkt::byte_order::write_u16;
///
/// let mut buf = [0u8; 2];
/// write_u16(&mut buf, 0xBEEF).unwrap();
/// assert_eq!(buf, [0xBE, 0xEF]);
/// ```
pub fn write_u16(bytes: &mut [u8], n: u16) -> Option<()> {
  bytes.get_mut(..2).map(|bs| NetworkEndian::write_u16(bs, n))
}

/// Write `n` into the first 4 bytes of `bytes`
pub fn write_u32(bytes: &mut [u8], n: u32) -> Option<()> {
  bytes.get_mut(..4).map(|bs| NetworkEndian::write_u32(bs, n))
}

/// Write `n` into the first 8 bytes of `bytes`
pub fn write_u64(bytes: &mut [u8], n: u64) -> Option<()> {
  bytes.get_mut(..8).map(|bs| NetworkEndian::write_u64(bs, n))
}
