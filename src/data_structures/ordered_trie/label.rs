// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Branch labels selecting a child edge.

use std::fmt;

/// A branch label: either one key byte or the terminal marker.
///
/// `Terminal` orders before every byte so that a key sorts ahead of every
/// longer key it is a prefix of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The key ends here.
    Terminal,
    /// The next key byte.
    Byte(u8),
}

impl Label {
    /// Returns `true` for the terminal marker.
    pub fn is_terminal(self) -> bool {
        matches!(self, Label::Terminal)
    }

    /// Probe for position `index` of `key`: the byte there, or `Terminal`
    /// when the key ends exactly at `index`.
    pub(crate) fn probe(key: &[u8], index: usize) -> Self {
        match key.get(index) {
            Some(&b) => Label::Byte(b),
            None => Label::Terminal,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Terminal => f.write_str("$"),
            Label::Byte(b) => write!(f, "{}", b.escape_ascii()),
        }
    }
}
