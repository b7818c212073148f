//! Translation of labelled records to ICD-10 codes.

use tracing::{debug, trace};

use skin_model::{
    ICD10_COLUMN, ICD11_COLUMN, LABEL_COLUMN, OntologyMapping, RecordTable, TranslateOptions,
    UNMATCHED_SENTINEL, is_unresolved_code,
};

use crate::error::{MapError, Result};
use crate::granularity::resolve_granularity;

/// Row counts gathered during a translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Rows in the input table.
    pub total: usize,
    /// Rows whose `icd10` was recomputed.
    pub processed: usize,
    /// Processed rows whose label was found in the mapping.
    pub matched: usize,
    /// Processed rows whose label was not found.
    pub unmatched: usize,
    /// Rows passed through untouched (only with `only_unmatched`).
    pub skipped: usize,
}

/// Result of translating a record table.
#[derive(Debug, Clone)]
pub struct Translation {
    /// The input table with `icd10` filled in for every processed row.
    pub table: RecordTable,
    /// Trimmed labels without a mapping entry, in row order, duplicates kept.
    pub unmatched_labels: Vec<String>,
    pub stats: TranslationStats,
}

/// Assigns ICD-10 codes to the rows of `table`.
///
/// Each selected row's `label_to_icd` value is trimmed and looked up exactly
/// in `mapping`. A match writes the code path resolved at
/// `options.granularity` into `icd10`; a miss writes `tbd` and records the
/// label. A row without a label cell is looked up as the empty label.
///
/// With `options.only_unmatched`, only rows whose `icd10` or `icd11` is
/// missing, empty or `tbd` are selected. A missing `icd10` or `icd11`
/// column counts as missing for every row. The `icd10` column is appended
/// when the table has none.
///
/// # Errors
///
/// Returns [`MapError::MissingColumn`] when the table has no `label_to_icd`
/// column.
pub fn translate_records(
    mut table: RecordTable,
    mapping: &OntologyMapping,
    options: &TranslateOptions,
) -> Result<Translation> {
    let label_index = table
        .column_index(LABEL_COLUMN)
        .ok_or_else(|| MapError::MissingColumn {
            column: LABEL_COLUMN.to_string(),
        })?;
    let icd10_index = table.ensure_column(ICD10_COLUMN);
    let icd11_index = table.column_index(ICD11_COLUMN);

    let mut stats = TranslationStats {
        total: table.len(),
        ..TranslationStats::default()
    };
    let mut unmatched_labels = Vec::new();

    for row in 0..table.len() {
        if options.only_unmatched
            && !is_unresolved_code(table.cell(row, Some(icd10_index)))
            && !is_unresolved_code(table.cell(row, icd11_index))
        {
            stats.skipped += 1;
            continue;
        }
        stats.processed += 1;

        let label = table
            .cell(row, Some(label_index))
            .unwrap_or("")
            .trim()
            .to_string();
        match mapping.get(&label) {
            Some(hierarchy) => {
                let code = resolve_granularity(hierarchy, options.granularity);
                trace!(row, code = %code, "label matched");
                table.set_cell(row, icd10_index, code);
                stats.matched += 1;
            }
            None => {
                trace!(row, "label unmatched");
                table.set_cell(row, icd10_index, UNMATCHED_SENTINEL);
                unmatched_labels.push(label);
                stats.unmatched += 1;
            }
        }
    }

    debug!(
        total = stats.total,
        processed = stats.processed,
        matched = stats.matched,
        unmatched = stats.unmatched,
        skipped = stats.skipped,
        "records translated"
    );

    Ok(Translation {
        table,
        unmatched_labels,
        stats,
    })
}
