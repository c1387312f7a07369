/// Version of the CoAP protocol that the message adheres to.
///
/// Only version 1 exists; parsing or building any other
/// version fails with [`crate::Error::VersionNotOne`].
///
/// See [RFC7252 - Message Details](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(pub u8);

impl Version {
  /// Whether this is the only version we can speak (1)
  pub fn is_supported(&self) -> bool {
    self.0 == 1
  }
}

impl Default for Version {
  fn default() -> Self {
    Version(1)
  }
}
