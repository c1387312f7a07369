/// Content-Format
///
/// Carried in the `Content-Format` and `Accept` options as
/// an unsigned integer; [`ContentFormat::bytes`] yields the
/// 2-byte big-endian form written by [`crate::Packet::response`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentFormat {
  /// `text/plain; charset=utf-8`
  Text,
  /// `application/link-format`
  LinkFormat,
  /// `application/xml`
  Xml,
  /// `application/octet-stream`
  OctetStream,
  /// `application/exi`
  Exi,
  /// `application/json`
  Json,
  /// Another content format
  Other(u16),
}

impl ContentFormat {
  /// Convert this content format to the CoAP byte value
  ///
  /// ```
  /// use toad_pkt::ContentFormat;
  ///
  /// assert_eq!(ContentFormat::Json.bytes(), [0, 50]);
  /// assert_eq!(ContentFormat::Other(1542).bytes(), [0x06, 0x06]);
  /// ```
  pub fn bytes(&self) -> [u8; 2] {
    u16::from(self).to_be_bytes()
  }

  /// Read a content format from an option value
  /// (a big-endian unsigned integer of 0 to 2 bytes)
  ///
  /// ```
  /// use toad_pkt::ContentFormat;
  ///
  /// assert_eq!(ContentFormat::from_bytes(&[]), Some(ContentFormat::Text));
  /// assert_eq!(ContentFormat::from_bytes(&[41]), Some(ContentFormat::Xml));
  /// assert_eq!(ContentFormat::from_bytes(&[0, 0, 50]), None);
  /// ```
  pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
    let n = match *bytes {
      | [] => 0,
      | [n] => u16::from(n),
      | [hi, lo] => u16::from_be_bytes([hi, lo]),
      | _ => return None,
    };

    Some(Self::from(n))
  }
}

impl<'a> From<&'a ContentFormat> for u16 {
  fn from(f: &'a ContentFormat) -> Self {
    use ContentFormat::*;
    match *f {
      | Text => 0,
      | LinkFormat => 40,
      | Xml => 41,
      | OctetStream => 42,
      | Exi => 47,
      | Json => 50,
      | Other(n) => n,
    }
  }
}

impl From<u16> for ContentFormat {
  fn from(n: u16) -> Self {
    use ContentFormat::*;
    match n {
      | 0 => Text,
      | 40 => LinkFormat,
      | 41 => Xml,
      | 42 => OctetStream,
      | 47 => Exi,
      | 50 => Json,
      | n => Other(n),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_values() {
    [(ContentFormat::Text, 0u16),
     (ContentFormat::LinkFormat, 40),
     (ContentFormat::Xml, 41),
     (ContentFormat::OctetStream, 42),
     (ContentFormat::Exi, 47),
     (ContentFormat::Json, 50)].into_iter()
                               .for_each(|(f, n)| {
                                 assert_eq!(u16::from(&f), n);
                                 assert_eq!(ContentFormat::from(n), f);
                               });
  }

  #[test]
  fn other_is_preserved() {
    assert_eq!(ContentFormat::from(60), ContentFormat::Other(60));
    assert_eq!(ContentFormat::Other(60).bytes(), [0, 60]);
  }
}
