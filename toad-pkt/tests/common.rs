#![allow(dead_code)]

use toad_pkt::*;

pub fn build(pkt: &Packet<'_>) -> Vec<u8> {
  let mut buf = vec![0u8; 1024];
  let n = pkt.try_into_bytes(&mut buf).unwrap();
  buf.truncate(n);
  buf
}

pub fn opt(number: u32, value: &'static [u8]) -> Opt<'static> {
  Opt { number: OptNumber(number),
        value: OptValue(value) }
}
