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

//! Functions and types for encoding data.

use super::codec::Codec;
use super::tier::{Header, Tier, MAX_BLOCK_SIZE};
use super::{FLAG_EVEN, FLAG_ODD};

use core::array;
use core::iter::{FusedIterator, Take};
use core::slice::Chunks;

/// An error encountered while encoding.
///
/// Neither variant can occur with the standard alphabet.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// No overflow tier brings the word into the alphabet.
    #[error(
        "cannot encode word {0:#06x}: no tier up to {} maps it into the \
         alphabet",
        Tier::MAX
    )]
    Unencodable(u16),
    /// A block header has no corresponding symbol.
    #[error("block header {0:#06x} has no symbol")]
    HeaderOutOfRange(u16),
}

/// Alias of <code>[Result]\<T, [EncodeError]></code>.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// A header symbol followed by the symbols of its block.
type Block = Take<array::IntoIter<char, { MAX_BLOCK_SIZE + 1 }>>;

fn empty_block() -> Block {
    IntoIterator::into_iter([FLAG_EVEN; MAX_BLOCK_SIZE + 1]).take(0)
}

enum CharEncoderState {
    Init,
    Running,
    Done,
}

/// Iterator returned by [`Codec::encode_to_chars`].
pub struct CharEncoder<'a> {
    codec: &'a Codec,
    odd: bool,
    words: Chunks<'a, u8>,
    block: Block,
    state: CharEncoderState,
}

impl<'a> CharEncoder<'a> {
    pub(crate) fn new(codec: &'a Codec, bytes: &'a [u8]) -> Self {
        Self {
            codec,
            odd: bytes.len() % 2 != 0,
            words: bytes.chunks(2),
            block: empty_block(),
            state: CharEncoderState::Init,
        }
    }

    /// Reads up to one block of words. The header can only be computed once
    /// every word in the block has been mapped.
    fn next_block(&mut self) -> EncodeResult<Option<Block>> {
        let block_size = self.codec.params().block_size();
        let mut chars = [FLAG_EVEN; MAX_BLOCK_SIZE + 1];
        let mut tiers = [Tier::ZERO; MAX_BLOCK_SIZE];
        let mut len = 0;

        for (i, chunk) in self.words.by_ref().take(block_size).enumerate() {
            // Little-endian; a trailing single byte is its own word.
            let word = chunk
                .iter()
                .rev()
                .fold(0, |word, &b| (word << 8) | u16::from(b));
            let (c, tier) = self.codec.map_word(word)?;
            chars[i + 1] = c;
            tiers[i] = tier;
            len += 1;
        }

        if len == 0 {
            return Ok(None);
        }
        chars[0] = self.codec.map_header(Header::pack(&tiers[..len]))?;
        Ok(Some(IntoIterator::into_iter(chars).take(len + 1)))
    }

    fn remaining_block_chars(&self) -> usize {
        let words = self.words.len();
        let block_size = self.codec.params().block_size();
        words + words / block_size + (words % block_size != 0) as usize
    }
}

impl<'a> Iterator for CharEncoder<'a> {
    type Item = EncodeResult<char>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            CharEncoderState::Init => {
                self.state = CharEncoderState::Running;
                Some(Ok(if self.odd {
                    FLAG_ODD
                } else {
                    FLAG_EVEN
                }))
            }
            CharEncoderState::Running => {
                if let Some(c) = self.block.next() {
                    return Some(Ok(c));
                }
                match self.next_block().transpose()? {
                    Ok(mut block) => {
                        let c = block.next();
                        self.block = block;
                        c.map(Ok)
                    }
                    Err(e) => {
                        self.state = CharEncoderState::Done;
                        Some(Err(e))
                    }
                }
            }
            CharEncoderState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            CharEncoderState::Init => {
                let upper = 1 + self.remaining_block_chars();
                (1, Some(upper))
            }
            CharEncoderState::Running => {
                let lower = self.block.len();
                (lower, Some(lower + self.remaining_block_chars()))
            }
            CharEncoderState::Done => (0, Some(0)),
        }
    }
}

impl<'a> FusedIterator for CharEncoder<'a> {}

#[cfg(test)]
mod tests {
    use crate::alphabet::make_alphabet;
    use crate::codec::Codec;
    use crate::standard;

    use super::*;
    use test_case::test_case;

    const HELLO: &str =
        "1\u{5292}\u{78b6}\u{7fda}\u{79bc}\u{8a8e}\u{85dd}\u{77da}h";

    #[test_case(b"Hello, world!", HELLO; "hello world")]
    #[test_case(&[0x0b, 0x0a, 0x0b, 0x0e], "0A\u{5758}\u{5b58}"; "babe")]
    #[test_case(&[], "0"; "empty")]
    #[test_case(&[0x61], "1A\u{3c3}"; "single byte")]
    #[test_case(&[0x61, 0x62], "0B\u{75cf}"; "single word")]
    #[test_case(&[0xff, 0xff], "0D\u{9faf}"; "max word")]
    fn fixtures(input: &[u8], expected: &str) {
        assert_eq!(standard().encode_to_string(input).unwrap(), expected);
    }

    #[test]
    fn header_per_block() {
        let codec = standard();
        let encoded = codec.encode_to_string(&[0; 30]).unwrap();
        // 15 words: three blocks of 7, 7 and 1.
        let chars: Vec<_> = encoded.chars().collect();
        assert_eq!(chars.len(), 1 + 15 + 3);
        assert_eq!(chars[0], '0');
        [1, 9, 17].iter().for_each(|&i| assert_eq!(chars[i], 'A'));
    }

    #[test]
    fn little_endian() {
        let a = standard().encode_to_string(&[0x01, 0x00]).unwrap();
        let b = standard().encode_to_string(&[0x00, 0x01]).unwrap();
        assert_eq!(a, "0AB");
        assert_eq!(b.chars().nth(2), standard().alphabet().symbol(0x100));
    }

    #[test]
    fn size_hint_is_exact_for_valid_input() {
        let codec = standard();
        (0..40).for_each(|n| {
            let bytes: Vec<u8> = (0..n).map(|i| (i * 37) as u8).collect();
            let mut iter = codec.encode_to_chars(&bytes);
            let expected = codec.params().encoded_len(n);
            assert_eq!(iter.size_hint().1, Some(expected));
            let mut count = 0;
            while let Some(c) = iter.next() {
                c.unwrap();
                count += 1;
                let (lower, upper) = iter.size_hint();
                assert!(lower <= expected - count);
                assert_eq!(upper, Some(expected - count));
            }
            assert_eq!(count, expected);
        });
    }

    #[test]
    fn unencodable_stops() {
        let codec = Codec::new(make_alphabet(0x9fae, true, true)).unwrap();
        let bytes = [0x00, 0x00, 0xff, 0xff, 0x00, 0x00];
        let mut iter = codec.encode_to_chars(&bytes);
        assert_eq!(iter.next(), Some(Ok('0')));
        assert_eq!(iter.next(), Some(Err(EncodeError::Unencodable(0xffff))));
        assert_eq!(iter.next(), None);
        assert_eq!(
            codec.encode_to_string(&[0xfe, 0xff]),
            Err(EncodeError::Unencodable(0xfffe)),
        );
    }
}
