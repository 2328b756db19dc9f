//! The set of external tokens the host grammar accepts right now.
//!
//! Hosts hand the scanner a boolean table indexed by token kind. It is
//! folded once into a bitset so every scan starts with an O(1) test.

use bitflags::bitflags;

use crate::{ExternalToken, ScanError};

bitflags! {
    /// External tokens acceptable in the current parse state.
    ///
    /// Bit `n` corresponds to the external token with index `n`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidSymbols: u8 {
        /// `identifier:` keyword-message segment.
        const KEYWORD = 1 << 0;
    }
}

impl ValidSymbols {
    /// Fold the host's boolean table into a bitset.
    ///
    /// Entries past [`ExternalToken::COUNT`] belong to the host and are
    /// ignored. A shorter table is a host bug.
    pub fn from_flags(flags: &[bool]) -> Result<Self, ScanError> {
        if flags.len() < ExternalToken::COUNT {
            return Err(ScanError::ValidSymbolsTooShort {
                expected: ExternalToken::COUNT,
                found: flags.len(),
            });
        }
        let mut set = ValidSymbols::empty();
        for token in ExternalToken::ALL {
            if flags[token.index()] {
                set |= ValidSymbols::of(token);
            }
        }
        Ok(set)
    }

    /// The single-member set for `token`.
    #[inline]
    pub const fn of(token: ExternalToken) -> Self {
        match token {
            ExternalToken::Keyword => ValidSymbols::KEYWORD,
        }
    }

    #[inline]
    pub fn accepts(self, token: ExternalToken) -> bool {
        self.contains(ValidSymbols::of(token))
    }
}
