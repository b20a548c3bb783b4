//! [`ActorEntity`] implementation for the [`Product`] domain type.

use super::error::CatalogError;
use super::queries::{CatalogQuery, CatalogQueryResult};
use crate::model::{seed_products, Product, ProductCreate, ProductId, ProductUpdate, MAX_RATING};
use actor_store::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<(), CatalogError> {
    if price < Decimal::ZERO {
        return Err(CatalogError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

fn validate_rating(rating: Decimal) -> Result<(), CatalogError> {
    if rating < Decimal::ZERO || rating > MAX_RATING {
        return Err(CatalogError::Validation(format!(
            "rating must be between 0 and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = CatalogQuery;
    type QueryResult = CatalogQueryResult;
    type Context = ();
    type Error = CatalogError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        validate_price(params.price)?;
        validate_rating(params.rating)?;
        Ok(Product::new(id, params))
    }

    fn seed() -> Vec<Self> {
        seed_products()
    }

    /// Validates every present field before touching any of them, so a
    /// rejected update leaves the product unchanged.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), CatalogError> {
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        if let Some(rating) = update.rating {
            validate_rating(rating)?;
        }
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CatalogError> {
        Ok(())
    }

    fn handle_query(items: &[Self], query: CatalogQuery) -> CatalogQueryResult {
        match query {
            CatalogQuery::Categories => {
                let mut categories: Vec<String> = Vec::new();
                for product in items {
                    if !categories.contains(&product.category) {
                        categories.push(product.category.clone());
                    }
                }
                CatalogQueryResult::Categories(categories)
            }
            CatalogQuery::Count => CatalogQueryResult::Count(items.len()),
            CatalogQuery::Search(filter) => CatalogQueryResult::Products(
                items.iter().filter(|p| filter.matches(p)).cloned().collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductFilter;

    fn params(price: i64, rating: i64) -> ProductCreate {
        ProductCreate {
            name: "Mochila".into(),
            description: "Mochila impermeável".into(),
            price: Decimal::new(price, 2),
            category: "Acessórios".into(),
            image: "https://example.com/mochila.jpg".into(),
            rating: Decimal::new(rating, 1),
            reviews: 0,
            in_stock: true,
        }
    }

    #[test]
    fn test_create_rejects_out_of_range_fields() {
        assert!(Product::from_create_params("7".into(), params(9990, 45)).is_ok());
        assert!(Product::from_create_params("7".into(), params(0, 0)).is_ok());
        assert!(matches!(
            Product::from_create_params("7".into(), params(-1, 45)),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            Product::from_create_params("7".into(), params(9990, 51)),
            Err(CatalogError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_product_unchanged() {
        let mut product = seed_products().remove(0);
        let before = product.clone();
        let update = ProductUpdate {
            name: Some("Renamed".into()),
            rating: Some(Decimal::new(60, 1)),
            ..ProductUpdate::default()
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn test_categories_are_distinct_in_first_appearance_order() {
        let result = Product::handle_query(&seed_products(), CatalogQuery::Categories);
        assert_eq!(
            result,
            CatalogQueryResult::Categories(vec![
                "Eletrônicos".to_string(),
                "Esportes".to_string(),
                "Roupas".to_string(),
            ])
        );
    }

    #[test]
    fn test_search_and_count() {
        let items = seed_products();
        assert_eq!(
            Product::handle_query(&items, CatalogQuery::Count),
            CatalogQueryResult::Count(6)
        );
        let CatalogQueryResult::Products(found) =
            Product::handle_query(&items, CatalogQuery::Search(ProductFilter::category("Roupas")))
        else {
            panic!("Search must return products");
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId::from("4"));
    }
}
