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

use super::alphabet::Alphabet;
use super::decode::{CharDecoder, DecodeConfig, DecodeError, DecodeResult};
use super::decode::{DecodeTextError, DecodeTextResult};
use super::encode::{CharEncoder, EncodeError, EncodeResult};
use super::params::{InitError, Params};
use super::tier::{Header, Tier};

use core::str::Chars;

/// An alphabet together with the constants derived from it.
///
/// Building a codec checks that the alphabet is dense enough; after that,
/// encoding and decoding only read from it.
#[derive(Clone, Debug)]
pub struct Codec {
    alphabet: Alphabet,
    params: Params,
}

impl Codec {
    pub fn new(alphabet: Alphabet) -> Result<Self, InitError> {
        let params = Params::new(alphabet.len())?;
        tracing::debug!(
            alphabet_len = params.alphabet_len(),
            overflow_offset = params.overflow_offset(),
            block_size = params.block_size(),
            "codec initialized"
        );
        Ok(Self {
            alphabet,
            params,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Maps a word to a symbol, using the lowest tier that lands inside the
    /// alphabet.
    pub(crate) fn map_word(&self, word: u16) -> EncodeResult<(char, Tier)> {
        let offset = self.params.overflow_offset();
        Tier::all()
            .find_map(|tier| {
                u32::from(word)
                    .checked_sub(offset * u32::from(tier))
                    .and_then(|i| usize::try_from(i).ok())
                    .and_then(|i| self.alphabet.symbol(i))
                    .map(|c| (c, tier))
            })
            .ok_or(EncodeError::Unencodable(word))
    }

    pub(crate) fn map_header(&self, header: Header) -> EncodeResult<char> {
        self.alphabet
            .symbol(header.bits().into())
            .ok_or(EncodeError::HeaderOutOfRange(header.bits()))
    }

    /// Recovers the word that `c` stands for at the given tier.
    pub(crate) fn unmap_symbol(
        &self,
        c: char,
        tier: Tier,
    ) -> DecodeResult<u16> {
        let index =
            self.alphabet.index_of(c).ok_or(DecodeError::BadChar(c))?;
        let word = u32::from(index)
            + self.params.overflow_offset() * u32::from(tier);
        u16::try_from(word).map_err(|_| DecodeError::OutOfRange(c))
    }

    pub(crate) fn unmap_header(&self, c: char) -> DecodeResult<Header> {
        let index =
            self.alphabet.index_of(c).ok_or(DecodeError::BadChar(c))?;
        Header::from_bits(index, self.params.block_size())
            .ok_or(DecodeError::BadHeader(c))
    }

    /// Encodes `bytes` as a sequence of chars.
    pub fn encode_to_chars<'a>(&'a self, bytes: &'a [u8]) -> CharEncoder<'a> {
        CharEncoder::new(self, bytes)
    }

    pub fn encode_to_string(&self, bytes: &[u8]) -> EncodeResult<String> {
        self.encode_to_chars(bytes).collect()
    }

    /// Decodes a sequence of chars.
    pub fn decode_chars<I>(&self, chars: I) -> CharDecoder<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        self.decode_chars_with(chars, DecodeConfig::new())
    }

    /// Decodes a sequence of chars with the given config.
    pub fn decode_chars_with<I>(
        &self,
        chars: I,
        config: DecodeConfig,
    ) -> CharDecoder<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        CharDecoder::new(self, chars.into_iter(), config)
    }

    pub fn decode_str<'s>(&self, s: &'s str) -> CharDecoder<'_, Chars<'s>> {
        self.decode_chars(s.chars())
    }

    pub fn decode_str_with<'s>(
        &self,
        s: &'s str,
        config: DecodeConfig,
    ) -> CharDecoder<'_, Chars<'s>> {
        self.decode_chars_with(s.chars(), config)
    }

    pub fn decode_to_vec(&self, s: &str) -> DecodeResult<Vec<u8>> {
        self.decode_to_vec_with(s, DecodeConfig::new())
    }

    pub fn decode_to_vec_with(
        &self,
        s: &str,
        config: DecodeConfig,
    ) -> DecodeResult<Vec<u8>> {
        let capacity = self.params.max_decoded_len(s.chars().count());
        let mut bytes = Vec::with_capacity(capacity);
        for b in self.decode_str_with(s, config) {
            bytes.push(b?);
        }
        Ok(bytes)
    }

    /// Decodes `s` and interprets the result as UTF-8.
    pub fn decode_to_string(&self, s: &str) -> DecodeTextResult<String> {
        self.decode_to_string_with(s, DecodeConfig::new())
    }

    pub fn decode_to_string_with(
        &self,
        s: &str,
        config: DecodeConfig,
    ) -> DecodeTextResult<String> {
        let bytes = self.decode_to_vec_with(s, config)?;
        String::from_utf8(bytes).map_err(DecodeTextError::from)
    }
}
