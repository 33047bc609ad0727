/*
 * Copyright (C) 2026 The base16bit Developers
 *
 * This file is part of base16bit.
 *
 * base16bit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base16bit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base16bit. If not, see <https://www.gnu.org/licenses/>.
 */

//! Constants derived from the size of an alphabet.

use super::tier::{Tier, MAX_BLOCK_SIZE};

/// The largest 16-bit word.
pub const MAX_WORD: u32 = u16::MAX as u32;

/// The largest [`Params::safe_ratio_divisor`] the tier scheme supports.
pub const MAX_SAFE_RATIO_DIVISOR: u32 = Tier::MAX as u32;

/// An error encountered while deriving [`Params`] from an alphabet.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The alphabet has no symbols.
    #[error("the alphabet is empty")]
    Empty,
    /// The alphabet is too small for three overflow tiers to cover every
    /// 16-bit word.
    #[error(
        "an alphabet of {len} symbols is too small: \
         safe ratio divisor {divisor} exceeds {}",
        MAX_SAFE_RATIO_DIVISOR
    )]
    TooSmall {
        /// Number of symbols in the alphabet.
        len: usize,
        /// `floor(65535 / len)`.
        divisor: u32,
    },
    /// The alphabet has more symbols than there are 16-bit words.
    #[error("an alphabet of {0} symbols exceeds the 16-bit word space")]
    TooLarge(usize),
}

/// The codec constants for one alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    alphabet_len: u32,
    out_of_bound_difference: u32,
    safe_ratio_divisor: u32,
    overflow_offset: u32,
    block_size: usize,
}

impl Params {
    /// Derives the constants for an alphabet of `alphabet_len` symbols.
    pub fn new(alphabet_len: usize) -> Result<Self, InitError> {
        let len = match u32::try_from(alphabet_len) {
            Ok(0) => return Err(InitError::Empty),
            Ok(len) if len < MAX_WORD => len,
            _ => return Err(InitError::TooLarge(alphabet_len)),
        };

        let divisor = MAX_WORD / len;
        if divisor > MAX_SAFE_RATIO_DIVISOR {
            return Err(InitError::TooSmall {
                len: alphabet_len,
                divisor,
            });
        }

        let out_of_bound_difference = MAX_WORD - len;
        // Rounds half up.
        let overflow_offset =
            (2 * out_of_bound_difference + divisor) / (2 * divisor);
        // floor(floor(log2(len)) / 2) == floor(log2(len) / 2)
        let block_size = (len.ilog2() / 2) as usize;
        debug_assert!(block_size <= MAX_BLOCK_SIZE);

        Ok(Self {
            alphabet_len: len,
            out_of_bound_difference,
            safe_ratio_divisor: divisor,
            overflow_offset,
            block_size,
        })
    }

    pub fn alphabet_len(&self) -> u32 {
        self.alphabet_len
    }

    /// Number of 16-bit words with no direct symbol.
    pub fn out_of_bound_difference(&self) -> u32 {
        self.out_of_bound_difference
    }

    pub fn safe_ratio_divisor(&self) -> u32 {
        self.safe_ratio_divisor
    }

    /// The step subtracted from a word once per tier.
    pub fn overflow_offset(&self) -> u32 {
        self.overflow_offset
    }

    /// Number of words described by one header symbol.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Exact number of characters produced when encoding `byte_len` bytes.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        let words = byte_len / 2 + byte_len % 2;
        let headers = words / self.block_size
            + (words % self.block_size != 0) as usize;
        1 + words + headers
    }

    /// Upper bound on the number of bytes `char_count` encoded characters
    /// can decode to.
    pub fn max_decoded_len(&self, char_count: usize) -> usize {
        let rest = char_count.saturating_sub(1);
        let group = self.block_size + 1;
        let headers = rest / group + (rest % group != 0) as usize;
        (rest - headers) * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_alphabet() {
        let params = Params::new(21091).unwrap();
        assert_eq!(params.out_of_bound_difference(), 44444);
        assert_eq!(params.safe_ratio_divisor(), 3);
        assert_eq!(params.overflow_offset(), 14815);
        assert_eq!(params.block_size(), 7);
    }

    #[test]
    fn rounding() {
        // 44446 / 3 = 14815.33
        assert_eq!(Params::new(21089).unwrap().overflow_offset(), 14815);
        // 44445 / 3 = 14815
        assert_eq!(Params::new(21090).unwrap().overflow_offset(), 14815);
        // 35535 / 2 = 17767.5
        assert_eq!(Params::new(30000).unwrap().overflow_offset(), 17768);
    }

    #[test_case(16384, 7; "smallest usable")]
    #[test_case(21091, 7; "default")]
    #[test_case(65534, 7; "largest")]
    fn block_size(len: usize, expected: usize) {
        assert_eq!(Params::new(len).unwrap().block_size(), expected);
    }

    fn too_small(len: usize, divisor: u32) -> InitError {
        InitError::TooSmall { len, divisor }
    }

    #[test_case(0 => InitError::Empty; "empty")]
    #[test_case(16383 => too_small(16383, 4); "one short")]
    #[test_case(12979 => too_small(12979, 5); "half plane")]
    #[test_case(65535 => InitError::TooLarge(65535); "full word space")]
    fn rejected(len: usize) -> InitError {
        Params::new(len).unwrap_err()
    }

    #[test_case(0, 1; "empty")]
    #[test_case(1, 3; "one byte")]
    #[test_case(2, 3; "one word")]
    #[test_case(13, 9; "one full block")]
    #[test_case(14, 9; "one full block even")]
    #[test_case(16, 11; "two blocks")]
    fn encoded_len(bytes: usize, chars: usize) {
        assert_eq!(Params::new(21091).unwrap().encoded_len(bytes), chars);
    }

    #[test]
    fn max_decoded_len() {
        let params = Params::new(21091).unwrap();
        (0..200).for_each(|n| {
            assert!(params.max_decoded_len(params.encoded_len(n)) >= n);
        });
        assert_eq!(params.max_decoded_len(0), 0);
        assert_eq!(params.max_decoded_len(9), 14);
    }
}
