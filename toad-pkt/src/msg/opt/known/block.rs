use tinyvec::ArrayVec;

use crate::Error;

/// Block numbers must be less than this (they are 20 bits wide)
pub const MAX_BLOCK_NUM: u32 = 1 << 20;

/// Size of a block, encoded on the wire as the exponent `SZX`
/// where `size = 2^(SZX + 4)`.
///
/// `SZX` of 7 is reserved and cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum BlockSize {
  Bytes16 = 0,
  Bytes32 = 1,
  Bytes64 = 2,
  Bytes128 = 3,
  Bytes256 = 4,
  Bytes512 = 5,
  Bytes1024 = 6,
}

impl BlockSize {
  /// The size exponent `SZX`
  pub fn szx(&self) -> u8 {
    *self as u8
  }

  /// Size of the block in bytes
  ///
  /// ```
  /// use toad_pkt::BlockSize;
  ///
  /// assert_eq!(BlockSize::Bytes16.bytes(), 16);
  /// assert_eq!(BlockSize::Bytes1024.bytes(), 1024);
  /// ```
  pub fn bytes(&self) -> u16 {
    16 << self.szx()
  }
}

impl TryFrom<u8> for BlockSize {
  type Error = Error;

  fn try_from(szx: u8) -> Result<Self, Self::Error> {
    use BlockSize::*;
    match szx {
      | 0 => Ok(Bytes16),
      | 1 => Ok(Bytes32),
      | 2 => Ok(Bytes64),
      | 3 => Ok(Bytes128),
      | 4 => Ok(Bytes256),
      | 5 => Ok(Bytes512),
      | 6 => Ok(Bytes1024),
      | _ => Err(Error::UnsupportedBlockParams),
    }
  }
}

/// Value of a Block1 or Block2 option
/// ([RFC7959 Section 2.2](https://datatracker.ietf.org/doc/html/rfc7959#section-2.2))
///
/// Three items of information may need to be transferred in a
/// Block (Block1 or Block2) option:
/// * the size of the block ([`Block::size`])
/// * whether more blocks are following ([`Block::more`])
/// * the relative number of the block ([`Block::num`]) within a sequence of blocks with the given size.
///
/// On the wire these are packed into 1 to 3 bytes; the low 3 bits of the
/// last byte are `SZX`, the next bit is `M`, and the rest is `NUM`:
///
/// ```text
///  0
///  0 1 2 3 4 5 6 7
/// +-+-+-+-+-+-+-+-+
/// |  NUM  |M| SZX |
/// +-+-+-+-+-+-+-+-+
///
///  0                   1
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          NUM          |M| SZX |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///
///  0                   1                   2
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                   NUM                 |M| SZX |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
  num: u32,
  more: bool,
  size: BlockSize,
}

impl Block {
  /// Create a block, failing with [`Error::UnsupportedBlockParams`]
  /// if `num` does not fit in 20 bits.
  ///
  /// ```
  /// use toad_pkt::{Block, BlockSize, Error};
  ///
  /// assert!(Block::new(BlockSize::Bytes256, 6, true).is_ok());
  /// assert_eq!(Block::new(BlockSize::Bytes256, 1 << 20, true),
  ///            Err(Error::UnsupportedBlockParams));
  /// ```
  pub fn new(size: BlockSize, num: u32, more: bool) -> Result<Self, Error> {
    if num >= MAX_BLOCK_NUM {
      return Err(Error::UnsupportedBlockParams);
    }

    Ok(Self { num, more, size })
  }

  #[allow(missing_docs)]
  pub fn size(&self) -> BlockSize {
    self.size
  }

  #[allow(missing_docs)]
  pub fn more(&self) -> bool {
    self.more
  }

  #[allow(missing_docs)]
  pub fn num(&self) -> u32 {
    self.num
  }

  /// Encode this block as an option value, using as few bytes as `num` allows
  ///
  /// ```
  /// use toad_pkt::{Block, BlockSize};
  ///
  /// let block = Block::new(BlockSize::Bytes256, 1337, true).unwrap();
  /// assert_eq!(block.to_bytes().as_slice(), &[0x53, 0x9C]);
  /// ```
  pub fn to_bytes(&self) -> ArrayVec<[u8; 3]> {
    let last = ((self.num & 0b1111) as u8) << 4 | u8::from(self.more) << 3 | self.size.szx();

    let mut bytes = ArrayVec::new();
    match self.num {
      | n if n < 16 => (),
      | n if n < 4096 => bytes.push((n >> 4) as u8),
      | n => bytes.extend([(n >> 12) as u8, (n >> 4) as u8]),
    }
    bytes.push(last);

    bytes
  }

  /// Write this block into `buf`, yielding the number of bytes written
  pub fn write_to(&self, buf: &mut [u8]) -> Result<usize, Error> {
    let bytes = self.to_bytes();
    buf.get_mut(..bytes.len())
       .ok_or(Error::BufferTooSmall)?
       .copy_from_slice(&bytes);

    Ok(bytes.len())
  }

  /// Decode a block from an option value.
  ///
  /// An empty value is block 0 of 16 bytes with no more following.
  /// Values longer than 3 bytes or with an `SZX` of 7 yield
  /// [`Error::UnsupportedBlockParams`].
  ///
  /// ```
  /// use toad_pkt::{Block, BlockSize};
  ///
  /// let block = Block::from_bytes(&[0xF1, 0x20, 0x6C]).unwrap();
  /// assert_eq!(block.num(), 987654);
  /// assert_eq!(block.more(), true);
  /// assert_eq!(block.size(), BlockSize::Bytes256);
  /// ```
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
    if bytes.len() > 3 {
      return Err(Error::UnsupportedBlockParams);
    }

    let value = bytes.iter()
                     .fold(0u32, |value, b| value << 8 | u32::from(*b));

    Ok(Self { num: value >> 4,
              more: value & 0b1000 != 0,
              size: BlockSize::try_from((value & 0b111) as u8)? })
  }
}
