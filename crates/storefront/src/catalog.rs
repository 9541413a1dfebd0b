//! Static jewelry catalog and its filters.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom_core::CatalogItemId;

/// Jewelry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rings,
    Earrings,
    Bracelets,
    Necklaces,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Rings, Self::Earrings, Self::Bracelets, Self::Necklaces];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rings => "rings",
            Self::Earrings => "earrings",
            Self::Bracelets => "bracelets",
            Self::Necklaces => "necklaces",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rings => "Anillos",
            Self::Earrings => "Aretes",
            Self::Bracelets => "Pulseras",
            Self::Necklaces => "Collares",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Metal the piece is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Silver,
    Gold,
}

impl Material {
    pub const ALL: [Self; 2] = [Self::Silver, Self::Gold];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Silver => "Plata",
            Self::Gold => "Oro",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("unknown material: {s}"))
    }
}

/// A product in the catalog. Prices are in Colombian pesos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub material: Material,
    pub image: String,
    pub description: String,
}

/// Catalog filter selection. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub material: Option<Material>,
    /// Inclusive upper bound on the price.
    pub max_price: Option<Decimal>,
}

impl CatalogFilter {
    /// Parse a selector value where `"all"` (or empty) selects everything.
    ///
    /// # Errors
    ///
    /// Returns an error for a value that is neither `"all"` nor known.
    pub fn parse_choice<T: FromStr<Err = String>>(value: &str) -> Result<Option<T>, String> {
        match value.trim() {
            "" | "all" => Ok(None),
            other => other.parse().map(Some),
        }
    }

    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.category.is_none_or(|c| item.category == c)
            && self.material.is_none_or(|m| item.material == m)
            && self.max_price.is_none_or(|max| item.price <= max)
    }
}

/// The full, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The twelve pieces the shop launches with.
    #[must_use]
    pub fn seed() -> Self {
        use Category::{Bracelets, Earrings, Necklaces, Rings};
        use Material::{Gold, Silver};

        let entries: [(i64, &str, Category, Material, &str); 12] = [
            (1, "Anillo de Mariposa", Rings, Silver, "Elegante anillo con diamantes genuinos, perfecto para ocasiones especiales."),
            (2, "Collares de Oro", Earrings, Gold, "Hermoso collar de oro de 18k con diseño moderno y elegante."),
            (3, "Argollas de oro", Earrings, Silver, "Aretes de plata esterlina con diseño minimalista y contemporáneo."),
            (4, "Pulsera de Oro Rosa", Bracelets, Gold, "Pulsera de oro rosa con detalles delicados y ajustable a cualquier tamaño."),
            (5, "Anillo de Compromiso", Earrings, Gold, "Exquisito anillo de compromiso con diamante central y detalles en oro blanco."),
            (6, "Collar de Perlas", Necklaces, Silver, "Clásico collar de perlas cultivadas con cerradura de plata esterlina."),
            (7, "Collar de Perlas", Earrings, Gold, "Clásico collar de perlas cultivadas con cerradura de plata esterlina."),
            (8, "Collar de Perlas", Earrings, Gold, "Clásico collar de perlas cultivadas con cerradura de plata esterlina."),
            (9, "Anillos de Dijes", Rings, Silver, "Clásico anillo de dijes con detalles en plata esterlina."),
            (10, "Anillo de Flores", Rings, Silver, "Clásico anillo de flores cultivadas con cerradura de plata esterlina."),
            (11, "Collar de Flores", Necklaces, Silver, "Clásico collar de flores cultivadas con cerradura de plata esterlina."),
            (12, "Collar de Cuello ajustado", Necklaces, Silver, "Clásico collar de cuello ajustado con detalles en plata esterlina."),
        ];

        // Image numbering does not follow the IDs for the first six pieces.
        let images = [3, 1, 4, 6, 2, 5, 7, 8, 9, 10, 11, 12];

        let items = entries
            .into_iter()
            .zip(images)
            .map(|((id, name, category, material, description), image)| CatalogItem {
                id: CatalogItemId::new(id),
                name: name.to_owned(),
                price: Decimal::from(500_000),
                category,
                material,
                image: format!("Imgs/Imagen{image}.png"),
                description: description.to_owned(),
            })
            .collect();

        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: CatalogItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items matching `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}
