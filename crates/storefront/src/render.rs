//! Storefront presentation model and page template.

use askama::Template;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::{CatalogFilter, CatalogItem, Category, Material};
use crate::filters;

/// Catalog card display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCard {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

impl From<&CatalogItem> for CatalogCard {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            description: item.description.clone(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: Decimal,
    pub item_count: u32,
    pub open: bool,
}

impl CartView {
    #[must_use]
    pub fn from_cart(cart: &Cart, open: bool) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    name: line.name.clone(),
                    image: line.image.clone(),
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            total: cart.total(),
            item_count: cart.count(),
            open,
        }
    }
}

/// Filter option display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the storefront page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontView {
    pub products: Vec<CatalogCard>,
    pub cart: CartView,
    pub categories: Vec<OptionView>,
    pub materials: Vec<OptionView>,
    pub max_price: Option<Decimal>,
}

/// Build the storefront view for the filtered catalog.
#[must_use]
pub fn render(products: &[&CatalogItem], filter: &CatalogFilter, cart: &Cart, cart_open: bool) -> StorefrontView {
    let all = OptionView {
        value: "all",
        label: "Todos",
        selected: false,
    };

    let mut categories = vec![OptionView {
        selected: filter.category.is_none(),
        ..all.clone()
    }];
    categories.extend(Category::ALL.into_iter().map(|c| OptionView {
        value: c.as_str(),
        label: c.label(),
        selected: filter.category == Some(c),
    }));

    let mut materials = vec![OptionView {
        selected: filter.material.is_none(),
        ..all
    }];
    materials.extend(Material::ALL.into_iter().map(|m| OptionView {
        value: m.as_str(),
        label: m.label(),
        selected: filter.material == Some(m),
    }));

    StorefrontView {
        products: products.iter().map(|item| CatalogCard::from(*item)).collect(),
        cart: CartView::from_cart(cart, cart_open),
        categories,
        materials,
        max_price: filter.max_price,
    }
}

/// Storefront page.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Joyería</title>
</head>
<body>
<header>
  <button class="cart-toggle">Carrito <span class="cart-count">{{ view.cart.item_count }}</span></button>
</header>
<section class="filters">
  <select id="category">
  {% for option in view.categories %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
  {% endfor %}</select>
  <select id="material">
  {% for option in view.materials %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
  {% endfor %}</select>
  {% if let Some(max_price) = view.max_price %}<span id="price-value">{{ max_price|cop }}</span>{% endif %}
</section>
<div id="catalog">
{% for product in view.products %}
  <div class="product-card">
    <div class="product-image"><img src="{{ product.image }}" alt="{{ product.name }}"></div>
    <div class="product-info">
      <h3 class="product-title">{{ product.name }}</h3>
      <p class="product-price">{{ product.price|cop }}</p>
      <p class="product-description">{{ product.description }}</p>
      <button class="add-to-cart" data-id="{{ product.id }}">Hacer pedido</button>
    </div>
  </div>
{% endfor %}
</div>
<aside id="cart-modal" class="cart-sidebar{% if view.cart.open %} active{% endif %}">
  <div id="cart-items">
  {% if view.cart.items.is_empty() %}
    <p>Tu carrito está vacío</p>
  {% else %}
  {% for item in view.cart.items %}
    <div class="cart-item">
      <div class="cart-item-image"><img src="{{ item.image }}" alt="{{ item.name }}" width="40"></div>
      <div class="cart-item-info">
        <h4 class="cart-item-title">{{ item.name }}</h4>
        <p class="cart-item-price">{{ item.price|cop }} x {{ item.quantity }}</p>
      </div>
    </div>
  {% endfor %}
  {% endif %}
  </div>
  <p>Total: <span id="cart-total">{{ view.cart.total|cop }}</span></p>
</aside>
</body>
</html>
"#
)]
pub struct StorefrontPage<'a> {
    pub view: &'a StorefrontView,
}

/// Render a view as a full HTML page.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_html(view: &StorefrontView) -> Result<String, askama::Error> {
    StorefrontPage { view }.render()
}
