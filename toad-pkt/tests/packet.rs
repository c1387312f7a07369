use itertools::Itertools;
use toad_pkt::*;

mod common;
use common::*;

#[test]
fn parse_literal() {
  let bytes = [0x62, 0x45, 0x00, 0x01, 0x55, 0x9D, 0xC0, 0xFF, 0x77, 0x6F, 0x72, 0x6C, 0x64];
  let pkt = Packet::try_from_bytes(&bytes).unwrap();

  assert_eq!(pkt.header.ver, Version(1));
  assert_eq!(pkt.header.ty, Type::Ack);
  assert_eq!(pkt.header.tkl, 2);
  assert_eq!(pkt.header.code, Code(69));
  assert_eq!(pkt.header.code.to_string(), "2.05");
  assert_eq!(pkt.header.id, Id(1));
  assert_eq!(pkt.token, Token(&[0x55, 0x9D]));
  assert_eq!(pkt.opts.as_slice(), &[opt(12, b"")]);
  assert_eq!(pkt.payload.0, b"world");

  assert_eq!(build(&pkt), bytes.to_vec());
}

#[test]
fn trailing_marker_means_no_payload() {
  let bytes = [0x62, 0x45, 0x00, 0x01, 0x55, 0x9D, 0xC0, 0xFF];
  let pkt = Packet::try_from_bytes(&bytes).unwrap();
  assert!(pkt.payload.is_empty());
  assert_eq!(pkt.opts.len(), 1);
}

#[test]
fn short_input() {
  (0..4).for_each(|n| {
          assert_eq!(Packet::try_from_bytes(&[0x40, 0x01, 0x00, 0x01][..n]),
                     Err(Error::HeaderTooShort))
        });
}

#[test]
fn wrong_version() {
  [0x00u8, 0x80, 0xC0].into_iter().for_each(|b| {
                                    assert_eq!(Packet::try_from_bytes(&[b, 0x01, 0x00, 0x01]),
                                               Err(Error::VersionNotOne))
                                  });
}

#[test]
fn options_past_capacity() {
  // 17 options, each with delta 1 & no value
  let mut bytes = vec![0x40, 0x01, 0x00, 0x01];
  bytes.extend([0x10; 17]);

  let pkt = Packet::try_from_bytes(&bytes).unwrap();
  assert_eq!(pkt.opts.len(), MAX_OPTS);
  assert_eq!(pkt.opts.iter().map(|o| o.number.0).collect::<Vec<_>>(),
             (1..=16).collect::<Vec<_>>());

  assert_eq!(Packet::parse_with(&bytes, OptOverflow::Reject),
             Err(Error::TooManyOptions));
}

#[test]
fn round_trip() {
  let big_value = [7u8; 300];
  let token = [1, 2, 3, 4, 5, 6, 7, 8];

  let mut pkt = Packet::new(Type::Non, Code::PUT, Id(0xABCD));
  pkt.set_token(&token);
  pkt.add_option(known::URI_HOST, b"example.com").unwrap();
  pkt.add_option(known::URI_PATH, b"a").unwrap();
  pkt.add_option(known::URI_PATH, b"b").unwrap();
  pkt.add_option(known::CONTENT_FORMAT, &[50]).unwrap();
  pkt.add_option(known::PROXY_URI, &big_value).unwrap();
  pkt.add_option(OptNumber(2048), b"x").unwrap();
  pkt.set_payload(b"{\"temp\": 22.5}");

  let bytes = build(&pkt);
  let parsed = Packet::try_from_bytes(&bytes).unwrap();

  assert_eq!(parsed, pkt);
  assert_eq!(build(&parsed), bytes);
}

#[test]
fn insertion_order_does_not_change_bytes() {
  let opts = [opt(3, b"host"), opt(11, b"path"), opt(12, &[0]), opt(60, &[1, 0])];

  let expected = {
    let mut pkt = Packet::new(Type::Con, Code::POST, Id(3));
    opts.iter()
        .for_each(|o| pkt.add_option(o.number, o.value.0).unwrap());
    build(&pkt)
  };

  opts.iter().permutations(opts.len()).for_each(|order| {
                                        let mut pkt = Packet::new(Type::Con, Code::POST, Id(3));
                                        order.into_iter().for_each(|o| {
                                                           pkt.add_option(o.number, o.value.0)
                                                              .unwrap()
                                                         });
                                        assert_eq!(build(&pkt), expected);
                                      });
}

#[test]
fn repeated_options_keep_insertion_order() {
  let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  pkt.add_option(known::URI_QUERY, b"unit=c").unwrap();
  pkt.add_option(known::URI_PATH, b"sensors").unwrap();
  pkt.add_option(known::ACCEPT, &[50]).unwrap();
  pkt.add_option(known::URI_PATH, b"temp").unwrap();
  pkt.add_option(known::URI_PATH, b"latest").unwrap();

  let bytes = build(&pkt);
  let parsed = Packet::try_from_bytes(&bytes).unwrap();

  let path = parsed.find_options(known::URI_PATH)
                   .iter()
                   .map(|o| o.value.as_str().unwrap())
                   .collect::<Vec<_>>();
  assert_eq!(path, vec!["sensors", "temp", "latest"]);

  assert_eq!(parsed.opts.iter().map(|o| o.number).collect::<Vec<_>>(),
             vec![known::URI_PATH,
                  known::URI_PATH,
                  known::URI_PATH,
                  known::URI_QUERY,
                  known::ACCEPT]);
}

#[test]
fn find_missing_option() {
  let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  pkt.add_option(known::IF_MATCH, b"").unwrap();
  pkt.add_option(known::URI_PATH, b"").unwrap();
  assert!(pkt.find_options(known::ETAG).is_empty());
}

#[test]
fn build_error_order() {
  let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  pkt.header.ver = Version(2);
  pkt.set_token(&[1, 2]);

  let mut small = [0u8; 5];
  assert_eq!(pkt.try_into_bytes(&mut small), Err(Error::BufferTooSmall));

  let mut buf = [0u8; 64];
  assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::VersionNotOne));

  pkt.header.ver = Version(1);
  pkt.set_token(&[0; 9]);
  assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::TokenTooLong));

  pkt.set_token(&[1, 2]);
  pkt.header.tkl = 3;
  assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::TokenLengthMismatch));
}

#[test]
fn output_too_small_for_options() {
  let mut pkt = Packet::new(Type::Con, Code::GET, Id(1));
  pkt.add_option(known::URI_PATH, b"a-long-path-segment").unwrap();

  let needed = build(&pkt).len();
  let mut buf = vec![0u8; needed - 1];
  assert_eq!(pkt.try_into_bytes(&mut buf), Err(Error::BufferTooSmall));
}

#[test]
fn response_to_request() {
  let req_bytes = [0x42, 0x01, 0x00, 0x07, 0xCA, 0xFE, 0xB4, b't', b'e', b'm', b'p'];
  let req = Packet::try_from_bytes(&req_bytes).unwrap();
  assert_eq!(req.header.code.kind(), CodeKind::Request);

  let mut scratch = [0u8; 2];
  let rep = Packet::response(&mut scratch,
                             b"22.5",
                             req.header.id,
                             req.token,
                             Code::CONTENT,
                             Some(ContentFormat::Text)).unwrap();

  let bytes = build(&rep);
  let parsed = Packet::try_from_bytes(&bytes).unwrap();

  assert_eq!(parsed.header.ty, Type::Ack);
  assert_eq!(parsed.header.id, Id(7));
  assert_eq!(parsed.token, Token(&[0xCA, 0xFE]));
  assert_eq!(parsed.header.code.kind(), CodeKind::Response);
  assert_eq!(parsed.find_options(known::CONTENT_FORMAT)
                   .first()
                   .and_then(|o| ContentFormat::from_bytes(o.value.0)),
             Some(ContentFormat::Text));
  assert_eq!(parsed.payload, Payload(b"22.5"));
}
