//! Cross-checks against an independent CoAP implementation

use coap_lite::CoapOption;
use toad_pkt::*;

mod common;
use common::*;

#[test]
fn coap_lite_reads_our_bytes() {
  let mut pkt = Packet::new(Type::Con, Code::POST, Id(0x1234));
  pkt.set_token(&[9, 8, 7]);
  pkt.add_option(known::URI_PATH, b"a").unwrap();
  pkt.add_option(known::CONTENT_FORMAT, &[50]).unwrap();
  pkt.add_option(known::PROXY_URI, &[b'x'; 300]).unwrap();
  pkt.set_payload(b"hello, world!");

  let bytes = build(&pkt);
  let theirs = coap_lite::Packet::from_bytes(&bytes).unwrap();

  assert_eq!(theirs.header.message_id, 0x1234);
  assert_eq!(theirs.payload, b"hello, world!".to_vec());

  let first = |o: CoapOption| theirs.get_option(o).and_then(|vs| vs.front()).cloned();
  assert_eq!(first(CoapOption::UriPath), Some(b"a".to_vec()));
  assert_eq!(first(CoapOption::ContentFormat), Some(vec![50]));
  assert_eq!(first(CoapOption::ProxyUri), Some(vec![b'x'; 300]));
}

#[test]
fn we_read_coap_lite_bytes() {
  let mut theirs = coap_lite::Packet::new();
  theirs.header.message_id = 77;
  theirs.payload = b"{}".to_vec();
  let bytes = theirs.to_bytes().unwrap();

  let ours = Packet::try_from_bytes(&bytes).unwrap();
  assert_eq!(ours.header.id, Id(77));
  assert_eq!(ours.payload, Payload(b"{}"));
  assert!(ours.opts.is_empty());
}
