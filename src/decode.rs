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

//! Functions and types for decoding data.

use super::codec::Codec;
use super::tier::Header;
use super::{FLAG_EVEN, FLAG_ODD};

use core::array;
use core::iter::{FusedIterator, Peekable, Take};
use std::string::FromUtf8Error;

/// An error encountered while decoding a [`str`] or sequence of [`char`]s.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The first character was not an odd/even flag.
    #[error("bad length flag: {0:?}")]
    BadFlag(char),
    /// Encountered a character that is not in the alphabet.
    #[error("bad character: {0:?}")]
    BadChar(char),
    /// A block header described more words than a block holds.
    #[error("bad block header: {0:?}")]
    BadHeader(char),
    /// A symbol and its tier added up to more than 16 bits.
    #[error("symbol {0:?} decodes to a value beyond 16 bits")]
    OutOfRange(char),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// An error encountered while decoding to a [`String`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeTextError {
    /// The input was not valid encoded data.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The decoded bytes were not valid UTF-8.
    #[error("decoded data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Alias of <code>[Result]\<T, [DecodeTextError]></code>.
pub type DecodeTextResult<T> = Result<T, DecodeTextError>;

/// Used by the `decode_*_with` functions to configure the decoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct DecodeConfig {
    /// If true, decoding stops quietly at the first malformed character and
    /// keeps the bytes decoded so far, rather than producing an error.
    /// [default: false]
    pub relaxed: bool,
}

impl DecodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            relaxed: false,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(c: char) -> DecodeResult<bool> {
    match c {
        FLAG_EVEN | '\0' => Ok(false),
        FLAG_ODD | '\u{1}' => Ok(true),
        c => Err(Error::BadFlag(c)),
    }
}

type WordBytes = Take<array::IntoIter<u8, 2>>;

enum CharDecoderState {
    Init,
    Running {
        odd: bool,
    },
    Done,
}

/// Iterator returned by [`Codec::decode_chars`].
pub struct CharDecoder<'a, I: Iterator> {
    codec: &'a Codec,
    iter: Peekable<I>,
    config: DecodeConfig,
    state: CharDecoderState,
    header: Header,
    /// Position of the next data symbol within its block.
    position: usize,
    bytes: WordBytes,
}

impl<'a, I> CharDecoder<'a, I>
where
    I: Iterator<Item = char>,
{
    pub(crate) fn new(
        codec: &'a Codec,
        iter: I,
        config: DecodeConfig,
    ) -> Self {
        Self {
            codec,
            iter: iter.peekable(),
            config,
            state: CharDecoderState::Init,
            header: Header::default(),
            position: codec.params().block_size(),
            bytes: IntoIterator::into_iter([0; 2]).take(0),
        }
    }

    /// Decodes the next data symbol. A missing header or data symbol ends
    /// the input.
    fn next_word(&mut self) -> DecodeResult<Option<WordBytes>> {
        let odd = match self.state {
            CharDecoderState::Init => {
                let odd = match self.iter.next() {
                    Some(c) => parse_flag(c)?,
                    None => return Ok(None),
                };
                self.state = CharDecoderState::Running {
                    odd,
                };
                odd
            }
            CharDecoderState::Running {
                odd,
            } => odd,
            CharDecoderState::Done => return Ok(None),
        };

        if self.position >= self.codec.params().block_size() {
            self.header = match self.iter.next() {
                Some(c) => self.codec.unmap_header(c)?,
                None => return Ok(None),
            };
            self.position = 0;
        }

        let tier = self.header.tier(self.position);
        let word = match self.iter.next() {
            Some(c) => self.codec.unmap_symbol(c, tier)?,
            None => return Ok(None),
        };
        self.position += 1;

        // With an odd byte count, the high byte of the last word is padding.
        let len = if odd && self.iter.peek().is_none() {
            1
        } else {
            2
        };
        Ok(Some(IntoIterator::into_iter(word.to_le_bytes()).take(len)))
    }
}

impl<'a, I> Iterator for CharDecoder<'a, I>
where
    I: Iterator<Item = char>,
{
    type Item = DecodeResult<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(b) = self.bytes.next() {
            return Some(Ok(b));
        }
        match self.next_word() {
            Ok(Some(mut bytes)) => {
                let b = bytes.next();
                self.bytes = bytes;
                b.map(Ok)
            }
            Ok(None) => {
                self.state = CharDecoderState::Done;
                None
            }
            Err(e) => {
                self.state = CharDecoderState::Done;
                if self.config.relaxed {
                    tracing::debug!(error = %e, "stopping at malformed input");
                    None
                } else {
                    Some(Err(e))
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.bytes.len();
        if let CharDecoderState::Done = self.state {
            return (pending, Some(pending));
        }
        let (_, upper) = self.iter.size_hint();
        (
            pending,
            upper
                .and_then(|n| n.checked_mul(2))
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<'a, I> FusedIterator for CharDecoder<'a, I> where
    I: Iterator<Item = char>
{
}
