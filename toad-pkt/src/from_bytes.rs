use toad_cursor::Cursor;

/// Trait for converting a sequence of bytes into some data structure
/// that borrows from them.
///
/// Implementors never copy; every slice in `Self` points into `bytes`,
/// so the result cannot outlive the buffer it was parsed from.
pub trait TryFromBytes<'a>: Sized {
  /// Error type yielded if conversion fails
  type Error;

  /// Try to convert from some sequence of bytes
  /// into `Self`
  fn try_from_bytes(bytes: &'a [u8]) -> Result<Self, Self::Error>;
}

/// Trait adding the ability for a _piece_ of a data structure to parse itself by advancing a reader over a byte buffer.
pub(crate) trait TryConsumeBytes<'a>: Sized {
  /// Error type yielded if conversion fails
  type Error;

  /// Try to convert from the bytes at the reader's position
  /// into `Self`
  fn try_consume_bytes(bytes: &mut Reader<'a>) -> Result<Self, Self::Error>;
}

/// A [`Cursor`] that hands out slices borrowed from the
/// buffer itself rather than from the cursor.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
  buf: &'a [u8],
  cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
  pub(crate) fn new(buf: &'a [u8]) -> Self {
    Self { buf,
           cursor: Cursor::new(buf) }
  }

  /// Take the next byte, returning None if the buffer is exhausted
  pub(crate) fn next(&mut self) -> Option<u8> {
    self.cursor.next()
  }

  /// Take exactly `n` bytes, returning None (and not advancing)
  /// if fewer than `n` remain
  pub(crate) fn take_exact(&mut self, n: usize) -> Option<&'a [u8]> {
    let start = self.cursor.position();
    self.cursor.take_exact(n)?;
    self.buf.get(start..start + n)
  }

  /// Look at the next byte without advancing
  pub(crate) fn peek(&self) -> Option<u8> {
    self.buf.get(self.cursor.position()).copied()
  }

  /// Everything after the current position
  pub(crate) fn until_end(&self) -> &'a [u8] {
    self.buf.get(self.cursor.position()..).unwrap_or(&[])
  }

  #[cfg(test)]
  pub(crate) fn position(&self) -> usize {
    self.cursor.position()
  }
}
