//! Inventory commands.
//!
//! Each command opens the product line over the file storage, drives it
//! with the same events the page would send, and prints the outcome.
//!
//! # Usage
//!
//! ```bash
//! stockroom inventory list --category Ropa --sort quantity
//! stockroom inventory add -n "Gorra" -c Ropa -q 12 -p 15.50
//! stockroom inventory update 1760000000000 -n "Gorra" -c Ropa -q 8 -p 15.50
//! stockroom inventory delete 1760000000000
//! stockroom inventory export --out ./exports
//! stockroom inventory render --out inventario.html
//! ```

use std::fs;
use std::io::{self, Write};

use chrono::Utc;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stockroom_admin::export::ExportError;
use stockroom_admin::form::{FormError, ProductForm};
use stockroom_admin::projection::SortKey;
use stockroom_admin::render::{InventoryView, render_html};
use stockroom_admin::storage::FileStorage;
use stockroom_admin::{
    AdminEvent, Classic, InventoryApp, Ledger, LineKind, Notice, NoticeLevel, ProductLine,
};
use stockroom_core::{Listing, StorageError};
use thiserror::Error;

use crate::config::CliConfig;
use crate::{InventoryAction, ProductArgs};

/// Errors that can occur during inventory commands.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid product ID: {0}")]
    InvalidId(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] FormError),

    #[error("{0}")]
    InvalidSort(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type Id<L> = <<L as ProductLine>::Record as Listing>::Id;

/// Run an inventory command on the selected product line.
pub fn run(line: LineKind, action: InventoryAction, config: &CliConfig) -> Result<(), InventoryError> {
    tracing::debug!(%line, data_dir = %config.data_dir.display(), "Opening inventory");
    match line {
        LineKind::Classic => run_line::<Classic>(action, config),
        LineKind::Ledger => run_line::<Ledger>(action, config),
    }
}

fn run_line<L: ProductLine>(action: InventoryAction, config: &CliConfig) -> Result<(), InventoryError> {
    let mut app: InventoryApp<L, FileStorage> = InventoryApp::try_open(config.storage())?;
    let mut out = io::stdout().lock();

    match action {
        InventoryAction::List {
            search,
            category,
            sort,
        } => {
            let sort: SortKey = sort.parse().map_err(InventoryError::InvalidSort)?;
            app.dispatch(AdminEvent::Search(search));
            app.dispatch(AdminEvent::FilterCategory(category));
            let view = app.dispatch(AdminEvent::Sort(sort)).view;
            print_listing(&mut out, &view)?;
        }
        InventoryAction::Add(product) => {
            let form = product_form(product);
            form.parse()?;
            let outcome = app.dispatch(AdminEvent::Submit(form));
            check_saved(&mut app)?;
            report(&mut out, outcome.notice.as_ref())?;
        }
        InventoryAction::Update { id, product } => {
            let id = parse_id::<L>(&id)?;
            let form = product_form(product);
            form.parse()?;
            app.dispatch(AdminEvent::Edit(id));
            if !app.has_unsaved_edit() {
                return Err(InventoryError::NotFound(id.to_string()));
            }
            let outcome = app.dispatch(AdminEvent::Submit(form));
            check_saved(&mut app)?;
            report(&mut out, outcome.notice.as_ref())?;
        }
        InventoryAction::Delete { id } => {
            let id = parse_id::<L>(&id)?;
            if app.dispatch(AdminEvent::RequestDelete(id)).view.delete_prompt.is_none() {
                return Err(InventoryError::NotFound(id.to_string()));
            }
            let outcome = app.dispatch(AdminEvent::ConfirmDelete);
            check_saved(&mut app)?;
            report(&mut out, outcome.notice.as_ref())?;
        }
        InventoryAction::Export { out: dir } => {
            let outcome = app.dispatch(AdminEvent::Export);
            if let Some(export) = outcome.download {
                fs::create_dir_all(&dir)?;
                let path = dir.join(&export.filename);
                fs::write(&path, export.contents)?;
                tracing::info!(path = %path.display(), "Wrote export");
                writeln!(out, "{}", path.display())?;
            }
            report(&mut out, outcome.notice.as_ref())?;
        }
        InventoryAction::Render { out: path } => {
            let html = render_html(&app.view())?;
            match path {
                Some(path) => fs::write(path, html)?,
                None => out.write_all(html.as_bytes())?,
            }
        }
        InventoryAction::Seed => {
            if app.seed_if_absent(Utc::now())? {
                writeln!(out, "Seeded {} sample products", app.records().len())?;
            } else {
                writeln!(out, "Inventory already exists; nothing seeded")?;
            }
        }
    }

    Ok(())
}

fn check_saved<L: ProductLine>(app: &mut InventoryApp<L, FileStorage>) -> Result<(), InventoryError> {
    app.take_save_error().map_or(Ok(()), |e| Err(e.into()))
}

fn parse_id<L: ProductLine>(raw: &str) -> Result<Id<L>, InventoryError> {
    raw.trim()
        .parse()
        .map_err(|_| InventoryError::InvalidId(raw.to_owned()))
}

fn product_form(args: ProductArgs) -> ProductForm {
    ProductForm {
        name: args.name,
        category: args.category,
        quantity: args.quantity,
        price: args.price,
        description: args.description,
    }
}

fn report(out: &mut impl Write, notice: Option<&Notice>) -> io::Result<()> {
    let Some(notice) = notice else {
        return Ok(());
    };
    stockroom_admin::app::log_notice(notice);
    let marker = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    writeln!(out, "[{marker}] {}", notice.message)
}

fn print_listing(out: &mut impl Write, view: &InventoryView) -> io::Result<()> {
    if let Some(message) = view.empty_message {
        return writeln!(out, "{message}");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["ID", "Nombre", "Categoría", "Cantidad", "Precio", "Valor Total", "Estado"]
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for card in &view.cards {
        let badge = Cell::new(card.badge_label);
        let badge = if card.flagged { badge.fg(Color::Red) } else { badge };
        table.add_row(vec![
            Cell::new(&card.id),
            Cell::new(&card.name),
            Cell::new(&card.category),
            Cell::new(card.quantity).set_alignment(CellAlignment::Right),
            Cell::new(&card.price).set_alignment(CellAlignment::Right),
            Cell::new(&card.total).set_alignment(CellAlignment::Right),
            badge,
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Productos: {}  Valor total: {}  Stock bajo: {}",
        view.stats.item_count, view.stats.total_value, view.stats.low_stock_count
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gorra() -> ProductArgs {
        ProductArgs {
            name: "Gorra".to_string(),
            category: "Ropa".to_string(),
            quantity: "3".to_string(),
            price: "15".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_unreadable_data_dir_fails_before_writing() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not a directory").unwrap();
        let config = CliConfig {
            data_dir: file.path().to_path_buf(),
            product_line: LineKind::Classic,
        };

        let err = run(LineKind::Classic, InventoryAction::Add(gorra()), &config).unwrap_err();
        assert!(matches!(err, InventoryError::Storage(StorageError::Io { operation: "read", .. })));
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "not a directory");
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            product_line: LineKind::Classic,
        };
        run(LineKind::Classic, InventoryAction::Add(gorra()), &config).unwrap();

        let app: InventoryApp<Classic, _> = InventoryApp::try_open(config.storage()).unwrap();
        let id = app.records().first().unwrap().id.to_string();
        run(LineKind::Classic, InventoryAction::Delete { id: id.clone() }, &config).unwrap();

        let err = run(LineKind::Classic, InventoryAction::Delete { id }, &config).unwrap_err();
        assert!(matches!(err, InventoryError::NotFound(_)));
    }
}

