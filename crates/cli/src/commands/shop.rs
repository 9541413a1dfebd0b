//! Storefront commands.
//!
//! The cart lives only for the duration of one command.
//!
//! # Usage
//!
//! ```bash
//! stockroom shop catalog --category necklaces --material silver
//! stockroom shop order 2 2 6
//! stockroom shop render --order 4 --cart-open --out tienda.html
//! ```

use std::fs;
use std::io::{self, Write};
use std::str::FromStr;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;
use stockroom_core::CatalogItemId;
use stockroom_storefront::filters::format_cop;
use stockroom_storefront::render::render_html;
use stockroom_storefront::{Catalog, CatalogFilter, CatalogItem, ShopApp, ShopEvent};
use thiserror::Error;

use crate::{CatalogArgs, ShopAction};

/// Errors that can occur during storefront commands.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid catalog item ID: {0}")]
    InvalidId(String),

    #[error("Catalog item not found: {0}")]
    NotFound(CatalogItemId),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run a storefront command.
pub fn run(action: ShopAction) -> Result<(), ShopError> {
    let mut app = ShopApp::new(Catalog::seed());
    let mut out = io::stdout().lock();

    match action {
        ShopAction::Catalog(args) => {
            let filter = catalog_filter(&args)?;
            print_catalog(&mut out, &app.catalog().filter(&filter))?;
        }
        ShopAction::Order { ids } => {
            for id in parse_ids(&ids)? {
                check_known(&app, id)?;
                if let Some(alert) = app.dispatch(ShopEvent::Order(id)).alert {
                    writeln!(out, "{alert}")?;
                }
            }
            print_cart(&mut out, &app)?;
        }
        ShopAction::Render {
            filter,
            orders,
            cart_open,
            out: path,
        } => {
            let filter = catalog_filter(&filter)?;
            for id in parse_ids(&orders)? {
                check_known(&app, id)?;
                app.dispatch(ShopEvent::Order(id));
            }
            app.dispatch(ShopEvent::FilterCategory(filter.category));
            app.dispatch(ShopEvent::FilterMaterial(filter.material));
            let mut view = app.dispatch(ShopEvent::SetMaxPrice(filter.max_price)).view;
            if cart_open {
                view = app.dispatch(ShopEvent::ToggleCart).view;
            }
            let html = render_html(&view)?;
            match path {
                Some(path) => fs::write(path, html)?,
                None => out.write_all(html.as_bytes())?,
            }
        }
    }

    Ok(())
}

fn catalog_filter(args: &CatalogArgs) -> Result<CatalogFilter, ShopError> {
    let max_price = args
        .max_price
        .as_deref()
        .map(|raw| {
            Decimal::from_str(raw.trim()).map_err(|e| ShopError::InvalidFilter(format!("max price {raw:?}: {e}")))
        })
        .transpose()?;

    Ok(CatalogFilter {
        category: CatalogFilter::parse_choice(&args.category).map_err(ShopError::InvalidFilter)?,
        material: CatalogFilter::parse_choice(&args.material).map_err(ShopError::InvalidFilter)?,
        max_price,
    })
}

fn parse_ids(raw: &[String]) -> Result<Vec<CatalogItemId>, ShopError> {
    raw.iter()
        .map(|id| id.parse().map_err(|_| ShopError::InvalidId(id.clone())))
        .collect()
}

fn check_known(app: &ShopApp, id: CatalogItemId) -> Result<(), ShopError> {
    app.catalog().get(id).map(|_| ()).ok_or(ShopError::NotFound(id))
}

fn print_catalog(out: &mut impl Write, items: &[&CatalogItem]) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["ID", "Nombre", "Categoría", "Material", "Precio"]
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    for item in items {
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(&item.name),
            Cell::new(item.category.label()),
            Cell::new(item.material.label()),
            Cell::new(format_cop(item.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    writeln!(out, "{table}")
}

fn print_cart(out: &mut impl Write, app: &ShopApp) -> io::Result<()> {
    let cart = app.cart();
    if cart.is_empty() {
        return writeln!(out, "Tu carrito está vacío");
    }
    for line in cart.lines() {
        writeln!(out, "{}  {} x {}", line.name, format_cop(line.price), line.quantity)?;
    }
    writeln!(out, "Artículos: {}  Total: {}", cart.count(), format_cop(cart.total()))
}
