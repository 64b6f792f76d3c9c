//! Static filter-label tables.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

/// Maps a user-facing filter label to the lowercase substrings that count as
/// a tag match for it.
///
/// Entries keep declaration order, which is also the order of the selector
/// options. Labels are compared exactly, the way a keyed lookup would.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMap {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl CategoryMap {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Substrings relevant to `label`. An unmapped label yields an empty slice,
    /// so it can never match through the tag path.
    #[must_use]
    pub fn relevant(&self, label: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map_or(&[] as &'static [&'static str], |&(_, relevant)| relevant)
    }

    /// Mapped labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(label, _)| label)
    }
}
