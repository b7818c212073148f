use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::{info_span, trace};

use skin_cli::logging::redact_value;
use skin_cli::pipeline::{
    TranslateRequest, TranslateResult, load_ontology, resolve_ontology_dir, translate_dataset,
};
use skin_map::resolve_granularity;
use skin_model::{CODE_SEPARATOR, TranslateOptions};

use crate::cli::{OntologyArgs, TranslateArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_translate(args: &TranslateArgs) -> Result<TranslateResult> {
    let ontology_dir = resolve_ontology_dir(args.data.as_deref())?;
    let request = TranslateRequest {
        input: args.input.clone(),
        ontology_dir,
        output_dir: args.output.clone(),
        options: TranslateOptions::new()
            .with_granularity(args.granularity)
            .with_only_unmatched(args.only_unmatched),
        dry_run: args.dry_run,
    };

    let span = info_span!(
        "translate",
        input = %request.input.display(),
        granularity = ?request.options.granularity,
        only_unmatched = request.options.only_unmatched
    );
    let _guard = span.enter();
    let result = translate_dataset(&request)?;
    for label in &result.unmatched_labels {
        trace!(label = redact_value(label), "unmatched label");
    }
    Ok(result)
}

pub fn run_ontology(args: &OntologyArgs) -> Result<()> {
    let ontology_dir = resolve_ontology_dir(args.data.as_deref())?;
    let mapping = load_ontology(&ontology_dir)?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Description"),
        header_cell("Code path"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    for (description, path) in mapping.iter() {
        let description_cell = if description.trim().is_empty() {
            dim_cell(format!("{description:?}"))
        } else {
            Cell::new(description)
        };
        table.add_row(vec![
            description_cell,
            Cell::new(path.join(" > ")),
            Cell::new(resolve_granularity(path, args.granularity)),
        ]);
    }
    println!("{table}");
    println!(
        "{} descriptions, codes joined with '{CODE_SEPARATOR}'",
        mapping.len()
    );
    Ok(())
}
