//! Catalog entries.
//!
//! A [`Product`] is owned exclusively by the catalog store. Cart items and
//! orders copy the fields they need at add time, so nothing here is ever
//! referenced by pointer from another store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

super::string_id!(
    /// Identifier of a catalog entry.
    ProductId
);

/// Highest rating a product may carry.
pub const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub rating: Decimal,
    pub reviews: u32,
    pub in_stock: bool,
}

/// DTO for adding a product. The id is assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub rating: Decimal,
    pub reviews: u32,
    pub in_stock: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating: Option<Decimal>,
    pub reviews: Option<u32>,
    pub in_stock: Option<bool>,
}

/// Narrows a catalog listing. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring of name or description.
    pub text: Option<String>,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        match &self.text {
            Some(text) => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

impl Product {
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image: params.image,
            rating: params.rating,
            reviews: params.reviews,
            in_stock: params.in_stock,
        }
    }

    /// Merges the `Some` fields of `update` into `self`.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(reviews) = update.reviews {
            self.reviews = reviews;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// The catalog shipped with an empty store.
pub fn seed_products() -> Vec<Product> {
    let product = |id: &str,
                   name: &str,
                   description: &str,
                   price: i64,
                   category: &str,
                   image: &str,
                   rating: i64,
                   reviews: u32| Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price: Decimal::new(price, 2),
        category: category.into(),
        image: image.into(),
        rating: Decimal::new(rating, 1),
        reviews,
        in_stock: true,
    };

    vec![
        product(
            "1",
            "Smartphone Pro Max",
            "Smartphone premium com tela OLED de 6.7\", câmera tripla de 48MP, processador A15 Bionic e bateria de longa duração.",
            129999,
            "Eletrônicos",
            "https://images.pexels.com/photos/699122/pexels-photo-699122.jpeg?auto=compress&cs=tinysrgb&w=500",
            48,
            234,
        ),
        product(
            "2",
            "Laptop Gaming Ultra",
            "Laptop gamer com processador Intel i7, RTX 4070, 32GB RAM, SSD 1TB. Perfeito para gaming e produtividade.",
            249999,
            "Eletrônicos",
            "https://images.pexels.com/photos/18105/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=500",
            47,
            156,
        ),
        product(
            "3",
            "Tênis Esportivo Premium",
            "Tênis para corrida com tecnologia de amortecimento avançado, material respirável e design moderno.",
            24999,
            "Esportes",
            "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=500",
            46,
            89,
        ),
        product(
            "4",
            "Camiseta Casual Moderna",
            "Camiseta de algodão premium, corte moderno, disponível em várias cores. Confortável e estilosa.",
            3999,
            "Roupas",
            "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg?auto=compress&cs=tinysrgb&w=500",
            44,
            67,
        ),
        product(
            "5",
            "Fones de Ouvido Bluetooth",
            "Fones wireless com cancelamento de ruído ativo, bateria de 30h, qualidade de som premium.",
            19999,
            "Eletrônicos",
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=500",
            49,
            312,
        ),
        product(
            "6",
            "Relógio Inteligente",
            "Smartwatch com monitoramento de saúde, GPS, resistente à água, tela AMOLED e bateria de 7 dias.",
            34999,
            "Eletrônicos",
            "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=500",
            45,
            198,
        ),
    ]
}
