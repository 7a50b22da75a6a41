use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use label_catalog::resolve_catalog;
use label_cli::confirm::{AssumeYes, PromptConfirmer};
use label_cli::export::{ExportFormat, export_batch};
use label_cli::params::effective_params;
use label_compose::compose;
use label_history::{
    Authorization, FileHistory, HistoryStore, PersistenceError, authorize, check_overlap, commit,
    history_path,
};
use label_model::{Batch, Catalog};

use crate::cli::{
    BatchArgs, CatalogArgs, ComposeArgs, ExportFormatArg, HistoryArgs, PreviewFormatArg, PrintArgs,
};
use crate::summary::{
    print_batch_header, print_batch_preview, print_catalog, print_history, print_overlap,
};

/// How a command that consults the print history ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No serial was printed before, or the operator approved the duplicates.
    Clear,
    /// Some serials were printed before (check only).
    Collisions,
    /// The operator refused to print duplicates; nothing was recorded.
    Declined,
}

pub fn run_catalog(catalog_path: Option<&Path>, args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    print_catalog(&catalog, args.table);
    Ok(())
}

pub fn run_compose(catalog_path: Option<&Path>, args: &ComposeArgs) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let batch = compose_batch(&catalog, &args.batch)?;
    match args.format {
        PreviewFormatArg::Table => print_batch_preview(&batch),
        PreviewFormatArg::Csv => export_batch(&batch, ExportFormat::Csv, args.output.as_deref())?,
        PreviewFormatArg::Json => export_batch(&batch, ExportFormat::Json, args.output.as_deref())?,
    }
    Ok(())
}

pub fn run_check(
    catalog_path: Option<&Path>,
    history: Option<&Path>,
    args: &BatchArgs,
) -> Result<GuardOutcome> {
    let catalog = load_catalog(catalog_path)?;
    let batch = compose_batch(&catalog, args)?;
    let store = FileHistory::new(history_path(history));
    let printed = store.load().map_err(|error| persistence_failure(error, "load print history"))?;

    print_batch_header(&batch);
    let overlap = check_overlap(&batch, &printed);
    print_overlap(&overlap, &printed);
    Ok(if overlap.has_overlap {
        GuardOutcome::Collisions
    } else {
        GuardOutcome::Clear
    })
}

pub fn run_print(
    catalog_path: Option<&Path>,
    history: Option<&Path>,
    args: &PrintArgs,
) -> Result<GuardOutcome> {
    let catalog = load_catalog(catalog_path)?;
    let batch = compose_batch(&catalog, &args.batch)?;
    let span = info_span!(
        "print",
        major = %batch.class.major_code,
        start = batch.start,
        count = batch.count
    );
    let _guard = span.enter();

    let mut store = FileHistory::new(history_path(history));
    let printed = store.load().map_err(|error| persistence_failure(error, "load print history"))?;
    let overlap = check_overlap(&batch, &printed);

    // The interactive prompt lists the collisions itself.
    let decision = if args.assume_yes {
        if overlap.has_overlap {
            print_overlap(&overlap, &printed);
        }
        authorize(&overlap, &mut AssumeYes)
    } else {
        let mut confirmer = PromptConfirmer::new(io::stdin().lock(), io::stderr());
        authorize(&overlap, &mut confirmer)
    };
    if let Authorization::Declined { stage } = decision {
        eprintln!("Print cancelled at \"{}\"; nothing was recorded.", stage.title());
        return Ok(GuardOutcome::Declined);
    }

    let format = match args.format {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Json => ExportFormat::Json,
    };
    export_batch(&batch, format, args.output.as_deref())?;

    if let Err(error) = commit(&batch, &mut store) {
        eprintln!(
            "The labels were exported but the batch was NOT recorded in the print history. \
             Retrying this print may produce duplicates until the history is fixed."
        );
        return Err(persistence_failure(error, "record printed batch"));
    }
    if let Some(path) = &args.output {
        eprintln!("Exported {} labels to {}", batch.len(), path.display());
    }
    info!(
        labels = batch.len(),
        history = %store.path().display(),
        "batch printed"
    );
    Ok(GuardOutcome::Clear)
}

pub fn run_history(history: Option<&Path>, args: &HistoryArgs) -> Result<()> {
    let store = FileHistory::new(history_path(history));
    let printed = store.load().map_err(|error| persistence_failure(error, "load print history"))?;
    let entries = printed.entries();
    let shown = &entries[entries.len().saturating_sub(args.tail)..];
    print_history(shown, entries.len());
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    resolve_catalog(path).context("load catalog")
}

fn compose_batch(catalog: &Catalog, args: &BatchArgs) -> Result<Batch> {
    let class = catalog
        .resolve_class(&args.major, args.subtype.as_deref())
        .context("select component type")?;
    let params = effective_params(args.params.as_deref(), args.family.to_params())?;
    let batch = compose(catalog, &class, &params, args.start, args.count)
        .with_context(|| format!("compose {} labels for {}", args.count, class.major_name))?;
    Ok(batch)
}

/// Tell the operator what went wrong with the ledger and how to fix it.
fn persistence_failure(error: PersistenceError, action: &'static str) -> anyhow::Error {
    eprintln!("{}", error.user_message());
    if let Some(suggestion) = error.suggestion() {
        eprintln!("hint: {suggestion}");
    }
    anyhow::Error::new(error).context(action)
}
