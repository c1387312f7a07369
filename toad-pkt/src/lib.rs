//! Zero-copy CoAP packet parsing & serialization.
//!
//! The most notable item in `toad_pkt` is [`Packet`];
//! a CoAP message very close to the actual byte layout.
//!
//! ## Borrowing
//! A `Packet` does not own anything that varies in size:
//! - The message payload (in http terms: the request/response body)
//! - the token
//! - the value of an option (in http terms: header value)
//!
//! Instead these are slices of the buffer the packet was parsed from, or of
//! buffers owned by the caller when building a packet by hand. The borrow checker
//! guarantees a packet is never used after its buffer is dropped or modified.
//!
//! Options live in a fixed-capacity array of [`MAX_OPTS`] entries, so neither
//! parsing nor serializing ever allocates and the crate works without `std` or `alloc`.
//!
//! ```rust
//! use toad_pkt::*;
//!
//! let mut pkt = Packet::new(Type::Con, Code::GET, Id(0xBEEF));
//! pkt.set_token(&[0x01, 0x02]);
//! pkt.add_option(known::URI_PATH, b"temperature").unwrap();
//!
//! let mut buf = [0u8; 64];
//! let n = pkt.try_into_bytes(&mut buf).unwrap();
//!
//! let parsed = Packet::try_from_bytes(&buf[..n]).unwrap();
//! assert_eq!(parsed, pkt);
//! assert_eq!(parsed.find_options(known::URI_PATH)[0].value.as_str(),
//!            Some("temperature"));
//! ```
//!
//! ## Blockwise transfers
//! The values of Block1 & Block2 options ([RFC7959](https://datatracker.ietf.org/doc/html/rfc7959))
//! can be read & written with [`Block`]; see [`Packet::block`].
//!
//! ## Performance
//! This crate uses `criterion` to measure performance of parsing & serializing
//! alongside `coap_lite::Packet`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code, missing_copy_implementations))]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
#![deny(missing_docs)]

pub mod byte_order;

#[doc(hidden)]
pub mod from_bytes;

/// Message structs
pub mod msg;

#[doc(hidden)]
pub mod to_bytes;

#[doc(inline)]
pub use from_bytes::TryFromBytes;
#[doc(inline)]
pub use msg::*;
#[doc(inline)]
pub use to_bytes::TryIntoBytes;

#[cfg(test)]
pub(crate) fn test_pkt() -> (Packet<'static>, Vec<u8>) {
  //                        version  token len  code (2.05 Content)
  //                        |        |          /
  //                        |  type  |         /  message ID
  //                        |  |     |        |   |
  //                        vv vv vvvv vvvvvvvv vvvvvvvvvvvvvvvv
  let header: [u8; 4] = 0b_01_00_0001_01000101_0000000000000001u32.to_be_bytes();
  let token: [u8; 1] = [254u8];
  let content_format: &[u8] = b"application/json";
  let options: [&[u8]; 2] = [&[0b_1100_1101u8, 0b00000011u8], content_format];
  let payload: [&[u8]; 2] = [&[0b1111_1111_u8], b"hello, world!"];
  let bytes = [header.as_ref(),
               token.as_ref(),
               options.concat().as_ref(),
               payload.concat().as_ref()].concat();

  let mut pkt = Packet::new(Type::Con, Code::CONTENT, Id(1));
  pkt.set_token(&[254]);
  pkt.add_option(known::CONTENT_FORMAT, b"application/json")
     .unwrap();
  pkt.set_payload(b"hello, world!");

  (pkt, bytes)
}
