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

//! Generation of the symbol alphabet.

use super::ranges;

use core::fmt::{self, Display, Formatter, Write};
use core::iter::{Copied, FusedIterator};
use core::slice;

/// Number of code points in the Basic Multilingual Plane. Candidates are
/// never taken from beyond it.
pub const DEFAULT_SIZE: u32 = 1 << 16;

/// Lazy generator of alphabet symbols, in code-point order.
///
/// Returned by [`symbols`]. Clone it to walk the sequence more than once.
#[derive(Clone, Debug)]
pub struct Symbols {
    next: u32,
    size: u32,
    printable_only: bool,
    uri_safe: bool,
}

impl Symbols {
    fn accepts(&self, c: char) -> bool {
        self.printable_only
            && ranges::is_printable(c)
            && ranges::is_script(c)
            && self.uri_safe
            && ranges::is_uri_safe(c)
    }
}

impl Iterator for Symbols {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.size {
            let i = self.next;
            self.next += 1;
            // Surrogates have no `char`.
            if let Some(c) = char::from_u32(i) {
                if self.accepts(c) {
                    return Some(c);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.size - self.next).ok())
    }
}

impl FusedIterator for Symbols {}

/// Returns a generator over every code point below `size` (capped at
/// [`DEFAULT_SIZE`]) that belongs to one of the Latin, Greek, Cyrillic or
/// CJK script ranges.
///
/// Format and control characters, whitespace and characters reserved in
/// URIs are always skipped. Both `printable_only` and `uri_safe` must be
/// set for a symbol to be accepted; if either is false, the generator is
/// empty.
pub fn symbols(size: u32, printable_only: bool, uri_safe: bool) -> Symbols {
    Symbols {
        next: 0,
        size: size.min(DEFAULT_SIZE),
        printable_only,
        uri_safe,
    }
}

/// Collects [`symbols`] into an [`Alphabet`].
pub fn make_alphabet(
    size: u32,
    printable_only: bool,
    uri_safe: bool,
) -> Alphabet {
    Alphabet {
        symbols: symbols(size, printable_only, uri_safe).collect(),
    }
}

/// An immutable, ordered set of symbols.
///
/// Symbols are stored in ascending code-point order, which is what makes
/// [`Alphabet::index_of`] a binary search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Box<[char]>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`, if the alphabet is large enough.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The position of `c` in the alphabet.
    pub fn index_of(&self, c: char) -> Option<u16> {
        self.symbols
            .binary_search(&c)
            .ok()
            .and_then(|i| u16::try_from(i).ok())
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, char>> {
        self.symbols.iter().copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    /// The canonical alphabet: every printable, URI-safe script symbol in
    /// the Basic Multilingual Plane.
    fn default() -> Self {
        make_alphabet(DEFAULT_SIZE, true, true)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| f.write_char(c))
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = char;
    type IntoIter = Copied<slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length() {
        assert_eq!(Alphabet::default().len(), 21091);
    }

    #[test]
    fn default_layout() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.symbol(0), Some('A'));
        assert_eq!(alphabet.symbol(26), Some('a'));
        assert_eq!(alphabet.symbol(52), Some('\u{b5}'));
        assert_eq!(alphabet.symbol(179), Some('一'));
        assert_eq!(alphabet.symbol(21090), Some('龯'));
        assert_eq!(alphabet.symbol(21091), None);
    }

    #[test]
    fn ordered_and_in_bmp() {
        let alphabet = Alphabet::default();
        assert!(alphabet.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(alphabet.iter().all(|c| u32::from(c) < DEFAULT_SIZE));
    }

    #[test]
    fn no_digits() {
        let alphabet = Alphabet::default();
        assert!(('0'..='9').all(|c| !alphabet.contains(c)));
    }

    #[test]
    fn index_of() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.index_of('A'), Some(0));
        assert_eq!(alphabet.index_of('h'), Some(33));
        assert_eq!(alphabet.index_of('龯'), Some(21090));
        assert_eq!(alphabet.index_of('0'), None);
        assert_eq!(alphabet.index_of('\u{1c80}'), None);
        alphabet.iter().enumerate().for_each(|(i, c)| {
            assert_eq!(alphabet.index_of(c).map(usize::from), Some(i));
        });
    }

    #[test]
    fn generator_is_restartable() {
        let iter = symbols(0x100, true, true);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 53);
    }

    #[test]
    fn size_is_capped() {
        assert_eq!(make_alphabet(u32::MAX, true, true), Alphabet::default());
        assert!(make_alphabet(0, true, true).is_empty());
        assert_eq!(make_alphabet(0x5b, true, true).len(), 26);
    }

    #[test]
    fn unset_flags_give_empty_alphabet() {
        assert!(make_alphabet(DEFAULT_SIZE, false, true).is_empty());
        assert!(make_alphabet(DEFAULT_SIZE, true, false).is_empty());
        assert!(make_alphabet(DEFAULT_SIZE, false, false).is_empty());
        assert_eq!(symbols(DEFAULT_SIZE, false, true).next(), None);
    }

    #[test]
    fn non_printable_script_symbols_excluded() {
        let alphabet = Alphabet::default();
        assert!(('\u{1c80}'..='\u{1c86}').all(|c| !alphabet.contains(c)));
    }

    #[test]
    fn display() {
        assert_eq!(
            make_alphabet(0x5b, true, true).to_string(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        );
    }
}
