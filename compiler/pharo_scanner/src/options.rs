//! Scanner configuration.
//!
//! Options are fixed when a scanner is created. They are configuration,
//! not scan state, so they never appear in a serialized snapshot.

use pharo_lexer_core::IdentifierSet;

/// What happens to the cursor when a probe fails after reading an identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProbePolicy {
    /// Roll back to just after the skipped whitespace.
    #[default]
    Restore,
    /// Leave the probed characters consumed. The host grammar must then
    /// re-tokenize the stray identifier with its own rules.
    Consume,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    pub probe: ProbePolicy,
    pub identifiers: IdentifierSet,
}

impl ScanOptions {
    #[must_use]
    pub const fn with_probe(mut self, probe: ProbePolicy) -> Self {
        self.probe = probe;
        self
    }

    #[must_use]
    pub const fn with_identifiers(mut self, identifiers: IdentifierSet) -> Self {
        self.identifiers = identifiers;
        self
    }
}
