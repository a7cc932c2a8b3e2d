//! Command line interface
//!
//! Every command reads a catalog snapshot and JSON inputs from files and
//! prints pretty JSON on stdout.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configurator::ConfiguratorService;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::AppError;
use shared::models::{CartLine, CatalogSnapshot, Selection};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "configurator",
    about = "Resolve, price and export door configurations against a catalog snapshot",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List still-selectable options for a model
    Options(OptionsArgs),
    /// Resolve a selection and print its itemized price
    Price(PriceArgs),
    /// Project cart lines into export rows
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Catalog snapshot JSON file
    #[arg(long, env = "CONFIGURATOR_CATALOG")]
    pub(crate) catalog: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct OptionsArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Selection JSON file; an empty selection when omitted
    #[arg(long)]
    pub(crate) selection: Option<PathBuf>,
    /// Model code; defaults to the selection's model
    #[arg(long)]
    pub(crate) model: Option<String>,
    /// Style; defaults to the selection's style
    #[arg(long)]
    pub(crate) style: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PriceArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Selection JSON file
    #[arg(long)]
    pub(crate) selection: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Cart line JSON file, a single line or an array of lines
    #[arg(long)]
    pub(crate) line: PathBuf,
    /// Model name used when a door line no longer resolves
    #[arg(long)]
    pub(crate) fallback_model_name: Option<String>,
}

/// Failure of a command: the engine's own outcome or a bad input
#[derive(Debug)]
pub(crate) enum CommandError {
    App(AppError),
    Input(anyhow::Error),
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        Self::Input(err)
    }
}

pub(crate) fn run(cli: Cli, cache_ttl: Duration) -> Result<Value, CommandError> {
    match cli.command {
        Command::Options(args) => {
            let service = load_service(&args.catalog.catalog, cache_ttl)?;
            let selection: Selection = match &args.selection {
                Some(path) => read_json(path)?,
                None => Selection::default(),
            };
            let model = args
                .model
                .clone()
                .or_else(|| selection.model.clone())
                .ok_or_else(|| {
                    AppError::invalid_selection("A model code is required to list options")
                })?;
            let style = args.style.clone().or_else(|| selection.style.clone());

            let options = service.available_options(&model, style.as_deref(), &selection);
            Ok(to_value(options.as_ref())?)
        }
        Command::Price(args) => {
            let service = load_service(&args.catalog.catalog, cache_ttl)?;
            let selection: Selection = read_json(&args.selection)?;
            let price = service.price(&selection).map_err(AppError::from)?;
            Ok(to_value(&price)?)
        }
        Command::Export(args) => {
            let service = load_service(&args.catalog.catalog, cache_ttl)?;
            let lines = read_lines(&args.line)?;
            let rows: Vec<_> = lines
                .iter()
                .map(|line| service.export_line(line, args.fallback_model_name.as_deref()))
                .collect();
            Ok(to_value(&rows)?)
        }
    }
}

/// Load the catalog snapshot behind the service
///
/// An unreadable file is a storage failure and a malformed one an invalid
/// catalog; both are reported like engine errors, not as bad input.
fn load_service(path: &Path, cache_ttl: Duration) -> Result<ConfiguratorService, AppError> {
    let location = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::storage_unavailable(format!("Failed to read catalog: {e}"))
            .with_detail("path", location.clone())
    })?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_catalog(format!("Invalid catalog snapshot: {e}"))
            .with_detail("path", location.clone())
    })?;
    tracing::debug!(
        path = %path.display(),
        records = snapshot.record_count(),
        "Catalog snapshot loaded"
    );
    Ok(ConfiguratorService::new(snapshot, cache_ttl))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<CartLine>> {
    let value: Value = read_json(path)?;
    let lines: serde_json::Result<Vec<CartLine>> = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|line| vec![line])
    };
    lines.with_context(|| format!("Invalid cart line in {}", path.display()))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::ErrorCode;

    fn make_files(dir: &Path) -> (PathBuf, PathBuf) {
        let catalog = json!({
            "doors": [
                {"id": "d1", "properties": {"model code": "DM_1", "finish type": "Enamel",
                    "color/finish": "White", "width": 800, "height": 2000, "retail price": 15000}},
                {"id": "d2", "properties": {"model code": "DM_1", "finish type": "Veneer",
                    "color/finish": "Oak", "width": 900, "height": 2000, "retail price": 17000}}
            ]
        });
        let catalog_path = dir.join("catalog.json");
        std::fs::write(&catalog_path, catalog.to_string()).unwrap();

        let selection_path = dir.join("selection.json");
        std::fs::write(
            &selection_path,
            json!({"model": "DM_1", "finish": "Enamel", "width": 800}).to_string(),
        )
        .unwrap();

        (catalog_path, selection_path)
    }

    fn make_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("configurator").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_options_command() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, _) = make_files(dir.path());
        let catalog = catalog.to_str().unwrap();
        let cli = make_cli(&["options", "--catalog", catalog, "--model", "DM_1"]);

        let out = run(cli, Duration::ZERO).unwrap();
        assert_eq!(out["widths"], json!([800, 900]));
        assert_eq!(out["finishes"], json!(["Enamel", "Veneer"]));
    }

    #[test]
    fn test_options_requires_model() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, _) = make_files(dir.path());
        let cli = make_cli(&["options", "--catalog", catalog.to_str().unwrap()]);

        match run(cli, Duration::ZERO) {
            Err(CommandError::App(err)) => assert_eq!(err.code, ErrorCode::InvalidSelection),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_price_command() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, selection) = make_files(dir.path());
        let cli = make_cli(&[
            "price",
            "--catalog",
            catalog.to_str().unwrap(),
            "--selection",
            selection.to_str().unwrap(),
        ]);

        let out = run(cli, Duration::ZERO).unwrap();
        assert_eq!(out["total"], json!(15000.0));
    }

    #[test]
    fn test_price_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, _) = make_files(dir.path());
        let selection = dir.path().join("missing.json");
        std::fs::write(&selection, json!({"model": "NOPE"}).to_string()).unwrap();
        let cli = make_cli(&[
            "price",
            "--catalog",
            catalog.to_str().unwrap(),
            "--selection",
            selection.to_str().unwrap(),
        ]);

        match run(cli, Duration::ZERO) {
            Err(CommandError::App(err)) => {
                assert_eq!(err.code, ErrorCode::ConfigurationNotFound)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_export_accepts_single_line_and_array() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, _) = make_files(dir.path());

        let single = dir.path().join("line.json");
        std::fs::write(
            &single,
            json!({"id": "l1", "model": "DM_1", "finish": "Enamel", "width": 800}).to_string(),
        )
        .unwrap();
        let many = dir.path().join("lines.json");
        std::fs::write(
            &many,
            json!([
                {"id": "l1", "model": "DM_1", "finish": "Enamel", "width": 800},
                {"id": "l2", "type": "handle", "name": "Lever", "handle_id": "h1"}
            ])
            .to_string(),
        )
        .unwrap();

        let catalog = catalog.to_str().unwrap();
        let cli = make_cli(&["export", "--catalog", catalog, "--line", single.to_str().unwrap()]);
        let out = run(cli, Duration::ZERO).unwrap();
        assert_eq!(out.as_array().map(Vec::len), Some(1));

        let cli = make_cli(&["export", "--catalog", catalog, "--line", many.to_str().unwrap()]);
        let out = run(cli, Duration::ZERO).unwrap();
        assert_eq!(out.as_array().map(Vec::len), Some(2));
        assert_eq!(out[1]["kind"], json!("handle"));
    }

    #[test]
    fn test_unreadable_catalog_is_storage_error() {
        let cli = make_cli(&[
            "price",
            "--catalog",
            "/nonexistent/catalog.json",
            "--selection",
            "/nonexistent/selection.json",
        ]);
        match run(cli, Duration::ZERO) {
            Err(CommandError::App(err)) => {
                assert_eq!(err.code, ErrorCode::StorageUnavailable);
                assert_eq!(
                    err.details.unwrap()["path"],
                    json!("/nonexistent/catalog.json")
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_catalog_is_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let (_, selection) = make_files(dir.path());
        let catalog = dir.path().join("broken.json");
        std::fs::write(&catalog, json!({"doors": "not a list"}).to_string()).unwrap();
        let cli = make_cli(&[
            "price",
            "--catalog",
            catalog.to_str().unwrap(),
            "--selection",
            selection.to_str().unwrap(),
        ]);

        match run(cli, Duration::ZERO) {
            Err(CommandError::App(err)) => {
                assert_eq!(err.code, ErrorCode::InvalidCatalog);
                assert_eq!(err.code.category(), shared::error::ErrorCategory::Catalog);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_selection_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, _) = make_files(dir.path());
        let cli = make_cli(&[
            "price",
            "--catalog",
            catalog.to_str().unwrap(),
            "--selection",
            "/nonexistent/selection.json",
        ]);
        assert!(matches!(run(cli, Duration::ZERO), Err(CommandError::Input(_))));
    }
}
