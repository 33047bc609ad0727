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

/// Number of header bits used per word.
pub const TIER_BITS: u32 = 2;

/// Maximum number of words a 16-bit header can describe.
pub const MAX_BLOCK_SIZE: usize = (u16::BITS / TIER_BITS) as usize;

/// How many multiples of the overflow offset were subtracted from a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tier(u8);

impl Tier {
    pub const ZERO: Self = Self(0);
    pub const MAX: u8 = (1 << TIER_BITS) - 1;

    pub fn new(x: u8) -> Option<Self> {
        (x <= Self::MAX).then(|| Self(x))
    }

    /// Iterates over every tier, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> u8 {
        t.0
    }
}

impl From<Tier> for u32 {
    fn from(t: Tier) -> u32 {
        t.0.into()
    }
}

/// The tiers of one block, packed two bits per word. The first word of the
/// block occupies the least-significant bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header(u16);

impl Header {
    /// Packs up to [`MAX_BLOCK_SIZE`] tiers; any beyond that are ignored.
    pub fn pack(tiers: &[Tier]) -> Self {
        Self(tiers.iter().take(MAX_BLOCK_SIZE).rev().fold(0, |bits, &t| {
            (bits << TIER_BITS) | u16::from(u8::from(t))
        }))
    }

    /// Reads a header that describes `block_size` words. Fails if any bit
    /// beyond those words is set.
    pub fn from_bits(bits: u16, block_size: usize) -> Option<Self> {
        let width = u32::try_from(block_size).ok()?.checked_mul(TIER_BITS)?;
        match bits.checked_shr(width) {
            Some(0) | None => Some(Self(bits)),
            Some(_) => None,
        }
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// The tier of the word at `position` within the block.
    pub fn tier(self, position: usize) -> Tier {
        let shift = u32::try_from(position)
            .ok()
            .and_then(|p| p.checked_mul(TIER_BITS))
            .unwrap_or(u16::BITS);
        let bits = self.0.checked_shr(shift).unwrap_or(0);
        let bits = bits & u16::from(Tier::MAX);
        // Masked to two bits, so always a valid tier.
        u8::try_from(bits).ok().and_then(Tier::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(values: &[u8]) -> Vec<Tier> {
        values.iter().map(|&v| Tier::new(v).unwrap()).collect()
    }

    #[test]
    fn tier_bounds() {
        assert_eq!(Tier::new(3).map(u8::from), Some(3));
        assert_eq!(Tier::new(4), None);
        assert_eq!(Tier::all().count(), 4);
    }

    #[test]
    fn pack_order() {
        // "Hello, world!" as seven words.
        let header = Header::pack(&tiers(&[1, 1, 0, 1, 1, 1, 0]));
        assert_eq!(header.bits(), 1349);
        assert_eq!(Header::pack(&tiers(&[3])).bits(), 3);
        let header = Header::pack(&tiers(&[0, 0, 0, 0, 0, 0, 3]));
        assert_eq!(header.bits(), 0b11 << 12);
        assert_eq!(Header::pack(&[]).bits(), 0);
    }

    #[test]
    fn unpack() {
        let values = [2, 0, 3, 1, 0, 0, 1];
        let header = Header::pack(&tiers(&values));
        values.iter().enumerate().for_each(|(i, &v)| {
            assert_eq!(u8::from(header.tier(i)), v);
        });
        assert_eq!(header.tier(7), Tier::ZERO);
        assert_eq!(header.tier(usize::MAX), Tier::ZERO);
    }

    #[test]
    fn from_bits() {
        assert!(Header::from_bits(0x3fff, 7).is_some());
        assert!(Header::from_bits(0x4000, 7).is_none());
        assert!(Header::from_bits(0xffff, 8).is_some());
        assert!(Header::from_bits(1, 0).is_none());
    }
}
