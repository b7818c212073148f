//! Dataset translation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ontology**: Load and flatten the ontology documents
//! 2. **Ingest**: Read the input CSV file
//! 3. **Translate**: Resolve `icd10` for each selected record
//! 4. **Output**: Write the translated table and the unmatched label list
//!
//! A run depends only on the [`TranslateRequest`] it is given.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use skin_ingest::{
    UNMATCHED_LABELS_FILE, load_ontology_mapping, read_record_table, write_record_table,
    write_unmatched_labels,
};
use skin_map::{Translation, TranslationStats, translate_records};
use skin_model::{OntologyMapping, RecordTable, TranslateOptions};

/// Environment variable naming the default ontology folder.
pub const DATA_DIR_ENV_VAR: &str = "SKIN_ONTOLOGY_DATA_DIR";

/// Prefix added to the input file name for the translated table.
pub const TRANSLATED_FILE_PREFIX: &str = "translated_";

/// Everything a translation run depends on.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// Input CSV file.
    pub input: PathBuf,
    /// Folder containing the ontology documents.
    pub ontology_dir: PathBuf,
    /// Folder receiving the output artifacts.
    pub output_dir: PathBuf,
    pub options: TranslateOptions,
    /// Run every stage except writing outputs.
    pub dry_run: bool,
}

/// Outcome of a translation run.
#[derive(Debug)]
pub struct TranslateResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Number of descriptions in the flattened ontology.
    pub ontology_entries: usize,
    pub stats: TranslationStats,
    pub unmatched_labels: Vec<String>,
    /// Written translated table (`None` on a dry run).
    pub translated_path: Option<PathBuf>,
    /// Written unmatched label list (`None` on a dry run).
    pub unmatched_path: Option<PathBuf>,
}

/// Picks the explicit ontology folder, falling back to [`DATA_DIR_ENV_VAR`].
pub fn resolve_ontology_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_ontology_dir_from(explicit, std::env::var(DATA_DIR_ENV_VAR).ok().as_deref())
}

/// Picks `explicit`, then a non-empty `env_value`; errors when neither is usable.
pub fn resolve_ontology_dir_from(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match env_value {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(anyhow!(
            "no ontology folder given: pass --data or set {DATA_DIR_ENV_VAR}"
        )),
    }
}

/// `<output_dir>/translated_<input file name>`.
pub fn translated_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("input path has no file name: {}", input.display()))?;
    Ok(output_dir.join(format!("{TRANSLATED_FILE_PREFIX}{file_name}")))
}

/// `<output_dir>/unmatched_labels.txt`.
pub fn unmatched_output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(UNMATCHED_LABELS_FILE)
}

// ============================================================================
// Stage 1: Ontology
// ============================================================================

/// Load the flattened ontology mapping from a folder.
pub fn load_ontology(ontology_dir: &Path) -> Result<OntologyMapping> {
    let span = info_span!("ontology", ontology_dir = %ontology_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let mapping = load_ontology_mapping(ontology_dir)
        .with_context(|| format!("load ontology from {}", ontology_dir.display()))?;
    info!(
        entries = mapping.len(),
        duration_ms = start.elapsed().as_millis(),
        "ontology loaded"
    );
    Ok(mapping)
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Read the input CSV file.
pub fn ingest(input: &Path) -> Result<RecordTable> {
    let table =
        read_record_table(input).with_context(|| format!("read input {}", input.display()))?;
    info!(
        input = %input.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "input loaded"
    );
    Ok(table)
}

// ============================================================================
// Stage 3: Translate
// ============================================================================

/// Translate the records against the mapping.
pub fn translate(
    table: RecordTable,
    mapping: &OntologyMapping,
    options: &TranslateOptions,
) -> Result<Translation> {
    let start = Instant::now();
    let translation = translate_records(table, mapping, options).context("translate records")?;
    info!(
        processed = translation.stats.processed,
        matched = translation.stats.matched,
        unmatched = translation.stats.unmatched,
        skipped = translation.stats.skipped,
        duration_ms = start.elapsed().as_millis(),
        "translation complete"
    );
    Ok(translation)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Paths written by the output stage.
#[derive(Debug)]
pub struct OutputPaths {
    pub translated: PathBuf,
    pub unmatched: PathBuf,
}

/// Write the translated table and the unmatched label list.
///
/// The output folder is created when missing.
pub fn output(
    input: &Path,
    output_dir: &Path,
    translation: &Translation,
) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output folder {}", output_dir.display()))?;

    let translated = translated_output_path(input, output_dir)?;
    write_record_table(&translated, &translation.table)
        .with_context(|| format!("write {}", translated.display()))?;

    let unmatched = unmatched_output_path(output_dir);
    write_unmatched_labels(&unmatched, &translation.unmatched_labels)
        .with_context(|| format!("write {}", unmatched.display()))?;

    info!(
        translated = %translated.display(),
        unmatched = %unmatched.display(),
        "outputs written"
    );
    Ok(OutputPaths {
        translated,
        unmatched,
    })
}

/// Run every stage for one request.
///
/// # Errors
///
/// Fails on unreadable or malformed ontology documents, an unreadable input
/// file, an input without a `label_to_icd` column, or a failed write.
pub fn translate_dataset(request: &TranslateRequest) -> Result<TranslateResult> {
    let mapping = load_ontology(&request.ontology_dir)?;
    let table = ingest(&request.input)?;
    let translation = translate(table, &mapping, &request.options)?;

    let (translated_path, unmatched_path) = if request.dry_run {
        info!("dry run: skipping outputs");
        (None, None)
    } else {
        let paths = output(&request.input, &request.output_dir, &translation)?;
        (Some(paths.translated), Some(paths.unmatched))
    };

    Ok(TranslateResult {
        input: request.input.clone(),
        output_dir: request.output_dir.clone(),
        ontology_entries: mapping.len(),
        stats: translation.stats,
        unmatched_labels: translation.unmatched_labels,
        translated_path,
        unmatched_path,
    })
}
