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

//! Encodes binary data as printable, URI-safe Unicode, two bytes per
//! character whenever the 16-bit value has a direct symbol.
//!
//! The alphabet holds 21091 Latin, Greek, Cyrillic and CJK symbols. Words
//! beyond the alphabet are shifted down by a multiple of a fixed offset (their
//! *tier*), and every block of seven words is preceded by a header symbol that
//! records each word's tier in two bits.
//!
//! ```
//! let encoded = base16bit::encode("Hello, world!").unwrap();
//! assert_eq!(encoded.chars().count(), 9);
//! let decoded = base16bit::decode_to_string(&encoded).unwrap();
//! assert_eq!(decoded, "Hello, world!");
//! ```

pub mod alphabet;
mod codec;
pub mod decode;
pub mod encode;
pub mod params;
mod ranges;
mod tier;

use core::str::Chars;
use std::sync::LazyLock;

/// First character of an encoding of an even number of bytes.
const FLAG_EVEN: char = '0';
/// First character of an encoding of an odd number of bytes.
const FLAG_ODD: char = '1';

pub use alphabet::{make_alphabet, Alphabet};
pub use codec::Codec;
pub use decode::{DecodeConfig, DecodeError, DecodeResult};
pub use decode::{DecodeTextError, DecodeTextResult};
pub use encode::{EncodeError, EncodeResult};
pub use params::{InitError, Params};

static STANDARD: LazyLock<Codec> = LazyLock::new(|| {
    Codec::new(Alphabet::default())
        .unwrap_or_else(|e| panic!("cannot build the standard codec: {}", e))
});

/// The codec for the default alphabet, built on first use.
pub fn standard() -> &'static Codec {
    &STANDARD
}

/// Encodes bytes or UTF-8 text with the standard codec.
pub fn encode<T>(input: &T) -> EncodeResult<String>
where
    T: AsRef<[u8]> + ?Sized,
{
    standard().encode_to_string(input.as_ref())
}

/// Decodes a string produced by [`encode`].
pub fn decode_to_bytes(s: &str) -> DecodeResult<Vec<u8>> {
    standard().decode_to_vec(s)
}

/// Decodes a string produced by [`encode`] and interprets the result as
/// UTF-8.
pub fn decode_to_string(s: &str) -> DecodeTextResult<String> {
    standard().decode_to_string(s)
}

/// Decodes a `str` with the standard codec, byte by byte.
pub fn decode_str(s: &str) -> decode::CharDecoder<'static, Chars<'_>> {
    standard().decode_str(s)
}
