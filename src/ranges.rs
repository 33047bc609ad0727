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

//! Code-point tables that decide which characters may become symbols.

use core::ops::RangeInclusive;

pub type Ranges = &'static [RangeInclusive<u32>];

// Each script is the simple-case-folding closure of its lowercase range, so
// uppercase letters and compatibility forms such as U+212A KELVIN SIGN are
// members too.

/// `a-z`, case-insensitive.
pub const LATIN: Ranges =
    &[0x41..=0x5a, 0x61..=0x7a, 0x17f..=0x17f, 0x212a..=0x212a];

/// `α-ω`, case-insensitive.
pub const GREEK: Ranges = &[
    0xb5..=0xb5,
    0x345..=0x345,
    0x391..=0x3a1,
    0x3a3..=0x3a9,
    0x3b1..=0x3c9,
    0x3d0..=0x3d1,
    0x3d5..=0x3d6,
    0x3f0..=0x3f1,
    0x3f4..=0x3f5,
    0x1fbe..=0x1fbe,
    0x2126..=0x2126,
];

/// `а-я`, case-insensitive.
pub const CYRILLIC: Ranges = &[0x410..=0x44f, 0x1c80..=0x1c86];

/// CJK Unified Ideographs, `一-龯`.
pub const CJK: Ranges = &[0x4e00..=0x9faf];

pub const SCRIPTS: [Ranges; 4] = [LATIN, GREEK, CYRILLIC, CJK];

pub const NON_PRINTABLE: Ranges = &[
    0x0..=0x8,
    0xb..=0x1f,
    0x7f..=0x9f,
    0x1c80..=0x1c86,
    0x2000..=0x200f,
    0x2028..=0x202f,
    0x205f..=0x206f,
    0x3000..=0x3000,
    0xfeff..=0xfeff,
    0xe0100..=0xe01ef,
];

/// Characters with a reserved meaning in URIs. Whitespace is rejected
/// separately.
pub const URI_RESERVED: &[char] = &[
    '&', '$', '+', ',', ':', ';', '~', '"', '`', '\'', '=', '?', '@', '#', '<',
    '>', '/', '[', ']', '{', '}', '|', '\\', '^', '%',
];

pub fn contains(ranges: Ranges, c: char) -> bool {
    let c = u32::from(c);
    ranges.iter().any(|r| r.contains(&c))
}

pub fn is_script(c: char) -> bool {
    SCRIPTS.iter().any(|&ranges| contains(ranges, c))
}

pub fn is_printable(c: char) -> bool {
    !contains(NON_PRINTABLE, c)
}

pub fn is_uri_safe(c: char) -> bool {
    !c.is_whitespace() && !URI_RESERVED.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a'; "latin lowercase")]
    #[test_case('Z'; "latin uppercase")]
    #[test_case('\u{212a}'; "kelvin sign")]
    #[test_case('\u{17f}'; "long s")]
    #[test_case('ς'; "final sigma")]
    #[test_case('\u{3f4}'; "capital theta symbol")]
    #[test_case('Я'; "cyrillic uppercase")]
    #[test_case('一'; "first ideograph")]
    #[test_case('龯'; "last ideograph")]
    fn script_members(c: char) {
        assert!(is_script(c));
    }

    #[test_case('0'; "digit")]
    #[test_case('-'; "hyphen")]
    #[test_case('é'; "latin with accent")]
    #[test_case('ѐ'; "cyrillic outside range")]
    #[test_case('\u{9fb0}'; "past last ideograph")]
    #[test_case('\u{3a2}'; "unassigned greek")]
    fn script_non_members(c: char) {
        assert!(!is_script(c));
    }

    #[test]
    fn old_cyrillic_forms_are_not_printable() {
        ('\u{1c80}'..='\u{1c86}').for_each(|c| {
            assert!(is_script(c));
            assert!(!is_printable(c));
        });
    }

    #[test]
    fn scripts_avoid_exclusions() {
        SCRIPTS
            .iter()
            .flat_map(|ranges| ranges.iter().cloned())
            .flatten()
            .filter_map(char::from_u32)
            .for_each(|c| assert!(is_uri_safe(c), "{:?}", c));
    }

    #[test]
    fn uri_reserved() {
        assert!(!is_uri_safe('/'));
        assert!(!is_uri_safe(' '));
        assert!(!is_uri_safe('\u{3000}'));
        assert!(is_uri_safe('a'));
    }
}
