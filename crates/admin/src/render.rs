//! Presentation model and HTML rendering.
//!
//! [`render`] is a pure function from the projection and UI state to an
//! [`InventoryView`]; the view is rebuilt from scratch on every dispatch and
//! never patched. [`render_html`] turns a view into a full page.

use askama::Template;
use serde::Serialize;
use stockroom_core::{CurrencyCode, Listing, Price, StockBadge, StockPolicy, Theme};

use crate::form::ProductForm;
use crate::projection::{InventoryStats, SortKey, ViewQuery};

/// Product listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Grid => "product-grid",
            Self::List => "product-list",
        }
    }
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: String,
    pub total: String,
    pub badge: StockBadge,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    /// Whether the card is highlighted for attention.
    pub flagged: bool,
}

/// Summary figures, formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub item_count: usize,
    pub total_value: String,
    pub low_stock_count: usize,
}

/// Create/edit form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub editing_id: Option<String>,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: ProductForm,
}

impl FormView {
    /// Form in add mode holding `fields`.
    #[must_use]
    pub const fn add(fields: ProductForm) -> Self {
        Self {
            editing_id: None,
            title: "Agregar Producto",
            submit_label: "Agregar",
            fields,
        }
    }

    /// Form in edit mode for the record `id`.
    #[must_use]
    pub const fn edit(id: String, fields: ProductForm) -> Self {
        Self {
            editing_id: Some(id),
            title: "Editar Producto",
            submit_label: "Actualizar",
            fields,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

/// Open delete-confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePrompt {
    pub id: String,
    pub name: String,
}

/// Selectable option in a filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Search, category and sort controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub search: String,
    pub categories: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub active: bool,
}

/// Everything the display layer needs, derived from state in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub line: &'static str,
    pub theme: Theme,
    pub theme_class: &'static str,
    pub layout: Layout,
    pub layout_class: &'static str,
    pub cards: Vec<ProductCard>,
    /// Set when there are no cards to show; replaces the listing.
    pub empty_message: Option<&'static str>,
    pub stats: StatsView,
    pub filters: FilterView,
    pub form: FormView,
    pub delete_prompt: Option<DeletePrompt>,
}

/// UI state that is not part of the projection itself.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub line: &'static str,
    pub policy: StockPolicy,
    pub currency: CurrencyCode,
    pub query: &'a ViewQuery,
    pub categories: &'a [String],
    pub collection_is_empty: bool,
    pub layout: Layout,
    pub theme: Theme,
    pub form: FormView,
    pub delete_prompt: Option<DeletePrompt>,
}

/// Build the presentation model for a projection.
#[must_use]
pub fn render<R: Listing>(
    items: &[&R],
    stats: &InventoryStats,
    ctx: RenderContext<'_>,
) -> InventoryView {
    let cards: Vec<ProductCard> = items
        .iter()
        .map(|item| product_card(*item, ctx.policy, ctx.currency))
        .collect();

    let empty_message = if !cards.is_empty() {
        None
    } else if ctx.collection_is_empty {
        Some("No hay productos en el inventario")
    } else {
        Some("No se encontraron productos")
    };

    InventoryView {
        line: ctx.line,
        theme: ctx.theme,
        theme_class: match ctx.theme {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        },
        layout: ctx.layout,
        layout_class: ctx.layout.css_class(),
        cards,
        empty_message,
        stats: StatsView {
            item_count: stats.item_count,
            total_value: Price::new(stats.total_value, ctx.currency).display(),
            low_stock_count: stats.low_stock_count,
        },
        filters: filter_view(ctx.query, ctx.categories),
        form: ctx.form,
        delete_prompt: ctx.delete_prompt,
    }
}

fn product_card<R: Listing>(item: &R, policy: StockPolicy, currency: CurrencyCode) -> ProductCard {
    let badge = policy.badge(item.quantity());
    ProductCard {
        id: item.id().to_string(),
        name: item.name().to_owned(),
        category: item.category().to_owned(),
        description: item.description().map(str::to_owned),
        quantity: item.quantity(),
        price: Price::new(item.price(), currency).display(),
        total: Price::new(item.total_value(), currency).display(),
        badge,
        badge_label: badge.label(),
        badge_class: badge.css_class(),
        flagged: badge.needs_attention(),
    }
}

fn filter_view(query: &ViewQuery, categories: &[String]) -> FilterView {
    let selected = query.category.as_deref().unwrap_or_default();
    let mut category_options = vec![SelectOption {
        value: String::new(),
        label: "Todas las categorías".to_owned(),
        selected: selected.is_empty(),
    }];
    category_options.extend(categories.iter().map(|c| SelectOption {
        value: c.clone(),
        label: c.clone(),
        selected: c == selected,
    }));

    FilterView {
        search: query.search.clone(),
        categories: category_options,
        sort_options: SortKey::ALL
            .iter()
            .map(|key| SelectOption {
                value: key.as_str().to_owned(),
                label: key.label().to_owned(),
                selected: *key == query.sort,
            })
            .collect(),
        active: query.is_active(),
    }
}

/// Full inventory page.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Inventario</title>
</head>
<body class="{{ view.theme_class }}" data-line="{{ view.line }}">
<section class="stats">
  <div class="stat"><span class="stat-label">Productos</span><span id="totalProducts">{{ view.stats.item_count }}</span></div>
  <div class="stat"><span class="stat-label">Valor total</span><span id="totalValue">{{ view.stats.total_value }}</span></div>
  <div class="stat"><span class="stat-label">Stock bajo</span><span id="lowStock">{{ view.stats.low_stock_count }}</span></div>
</section>
<form id="productForm" class="form-card" method="post">
  <h2 id="formTitle">{{ view.form.title }}</h2>
  {% if let Some(id) = view.form.editing_id %}<input type="hidden" name="id" value="{{ id }}">{% endif %}
  <input name="name" value="{{ view.form.fields.name }}" required>
  <input name="category" value="{{ view.form.fields.category }}" required>
  <input name="quantity" type="number" value="{{ view.form.fields.quantity }}" required>
  <input name="price" type="number" step="0.01" value="{{ view.form.fields.price }}" required>
  <textarea name="description">{{ view.form.fields.description }}</textarea>
  <button id="submitBtn" type="submit">{{ view.form.submit_label }}</button>
  {% if view.form.editing_id.is_some() %}<button id="cancelBtn" type="reset">Cancelar</button>{% endif %}
</form>
<section class="filters">
  <input id="searchInput" type="search" value="{{ view.filters.search }}">
  <select id="filterCategory">
  {% for option in view.filters.categories %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
  {% endfor %}</select>
  <select id="sortBy">
  {% for option in view.filters.sort_options %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
  {% endfor %}</select>
</section>
{% if let Some(message) = view.empty_message %}
<div id="emptyState" class="empty-state show">{{ message }}</div>
{% else %}
<div id="productList" class="{{ view.layout_class }}">
{% for card in view.cards %}
  <div class="product-card{% if card.flagged %} low-stock{% endif %}" data-id="{{ card.id }}">
    <div class="product-header">
      <span class="product-category">{{ card.category }}</span>
      <span class="stock-badge {{ card.badge_class }}">{{ card.badge_label }}</span>
    </div>
    <h3 class="product-name">{{ card.name }}</h3>
    {% if let Some(description) = card.description %}<p class="product-description">{{ description }}</p>{% endif %}
    <div class="product-details">
      <span class="detail-value quantity">{{ card.quantity }}</span>
      <span class="detail-value price">{{ card.price }}</span>
      <span class="detail-value total">{{ card.total }}</span>
    </div>
  </div>
{% endfor %}
</div>
{% endif %}
{% if let Some(prompt) = view.delete_prompt %}
<div id="confirmModal" class="modal show" data-id="{{ prompt.id }}">
  <p>¿Eliminar {{ prompt.name }}?</p>
  <button id="confirmDelete">Eliminar</button>
  <button id="cancelDelete">Cancelar</button>
</div>
{% endif %}
</body>
</html>
"#
)]
pub struct InventoryPage<'a> {
    pub view: &'a InventoryView,
}

/// Render a view as a full HTML page.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_html(view: &InventoryView) -> Result<String, askama::Error> {
    InventoryPage { view }.render()
}
