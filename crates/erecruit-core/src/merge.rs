//! Continuation-fragment merging.
//!
//! Bordered tables that cross a page boundary come out of lattice detection
//! as several raw tables sharing a header. [`merge_tables`] stitches those
//! fragments back into logical tables. Columns are compared as unordered
//! sets, so a fragment whose columns were detected in a different order still
//! counts as a continuation.

use crate::table::{RawTable, TableSet};

/// Which existing logical table an incoming raw table may be merged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergeStrategy {
    /// Merge into the most recently created table with the same column set.
    #[default]
    LatestMatching,
    /// Merge only into table 1, as the legacy extractor did. A later pair of
    /// matching tables that do not match table 1 stays split.
    FirstTable,
    /// Never merge; every raw table becomes its own logical table.
    Disabled,
}

impl MergeStrategy {
    /// Pick the identifier of the table `incoming` should be appended to.
    fn candidate(self, tables: &TableSet, incoming: &RawTable) -> Option<usize> {
        if incoming.column_count() == 0 {
            return None;
        }
        match self {
            MergeStrategy::LatestMatching => tables
                .iter()
                .filter(|(_, t)| t.same_columns(incoming))
                .map(|(id, _)| id)
                .last(),
            MergeStrategy::FirstTable => tables
                .first()
                .filter(|t| t.same_columns(incoming))
                .map(|_| 1),
            MergeStrategy::Disabled => None,
        }
    }
}

/// Merge raw tables, in extraction order, into a [`TableSet`].
///
/// An incoming table whose column-label set equals that of the candidate
/// chosen by `strategy` has its rows appended to the candidate; otherwise it
/// is stored under the next identifier. Tables without columns are never
/// treated as continuations.
pub fn merge_tables<I>(raw_tables: I, strategy: MergeStrategy) -> TableSet
where
    I: IntoIterator<Item = RawTable>,
{
    let mut tables = TableSet::new();

    for incoming in raw_tables {
        match strategy.candidate(&tables, &incoming) {
            Some(id) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rows = incoming.row_count(),
                    into = %TableSet::label(id),
                    "merging continuation fragment"
                );
                if let Some(target) = tables.get_mut(id) {
                    target.append_rows(&incoming);
                }
            }
            None => {
                let _id = tables.push(incoming);
                #[cfg(feature = "tracing")]
                tracing::debug!(table = %TableSet::label(_id), "new logical table");
            }
        }
    }

    tables
}
