use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BrandId, CategoryId, ImageUrl, ProductId, ProductImageId, Status, TagId, non_blank,
};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ProductImageId,
    pub url: String,
}

/// Product as returned by the catalog API.
///
/// Category, brand and tag references are kept raw: the API may hand back
/// records whose references were never set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    pub quantity: i32,
    pub warranty: i32,
    pub image_url: String,
    pub status: Status,
    #[serde(default)]
    pub is_new_product: bool,
    #[serde(default)]
    pub is_featured_product: bool,
    #[serde(default)]
    pub is_favorite_product: bool,
    pub category_id: i32,
    pub brand_id: i32,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub tags: Vec<i32>,
}

/// Editable product attributes shared by the create and update payloads.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub quantity: i32,
    pub warranty: i32,
    pub image_url: ImageUrl,
    pub status: Status,
    pub is_new_product: bool,
    pub is_featured_product: bool,
    pub is_favorite_product: bool,
    pub category_id: CategoryId,
    pub brand_id: BrandId,
    pub tags: Vec<TagId>,
}

impl ProductFields {
    /// Trims text fields and drops duplicate tag ids keeping the first one.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = non_blank(self.description);
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|tag| {
            if seen.contains(tag) {
                false
            } else {
                seen.push(*tag);
                true
            }
        });
        self
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(flatten)]
    pub fields: ProductFields,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: ProductFields,
}

/// Replacement gallery for one product.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductImages {
    pub id: ProductId,
    pub images: Vec<ProductImage>,
}

impl RecordFields for Product {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            "imageUrl" => Some(Cow::Borrowed(self.image_url.as_str())),
            "price" => Some(Cow::Owned(self.price.to_string())),
            "salePrice" => self.sale_price.map(|price| Cow::Owned(price.to_string())),
            "warranty" => Some(Cow::Owned(self.warranty.to_string())),
            "quantity" => Some(Cow::Owned(self.quantity.to_string())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the products collection.
pub struct Products;

impl CatalogEntity for Products {
    type Id = ProductId;
    type Record = Product;
    type New = NewProduct;
    type Update = UpdateProduct;

    const RESOURCE: &'static str = "products";
    const TITLE: &'static str = "Products";
    const SINGULAR: &'static str = "product";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("name", "Name"),
        Column::plain("imageUrl", "Image"),
        Column::sortable("price", "Price"),
        Column::sortable("warranty", "Warranty"),
        Column::sortable("quantity", "Quantity"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &Product) -> ProductId {
        record.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProductFields {
        ProductFields {
            name: "  Lamp ".to_string(),
            description: Some("   ".to_string()),
            price: 12.5,
            sale_price: None,
            quantity: 3,
            warranty: 12,
            image_url: ImageUrl::new("https://cdn.example.com/lamp.png").unwrap(),
            status: Status::Active,
            is_new_product: true,
            is_featured_product: false,
            is_favorite_product: false,
            category_id: CategoryId::new(1).unwrap(),
            brand_id: BrandId::new(2).unwrap(),
            tags: vec![
                TagId::new(3).unwrap(),
                TagId::new(4).unwrap(),
                TagId::new(3).unwrap(),
            ],
        }
    }

    #[test]
    fn normalized_trims_and_dedupes_tags() {
        let fields = fields().normalized();

        assert_eq!(fields.name, "Lamp");
        assert_eq!(fields.description, None);
        assert_eq!(
            fields.tags.iter().map(|t| t.get()).collect::<Vec<_>>(),
            vec![3, 4]
        );
    }

    #[test]
    fn update_payload_is_flat_camel_case() {
        let payload = UpdateProduct {
            id: ProductId::new("p-1").unwrap(),
            fields: fields().normalized(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "p-1");
        assert_eq!(json["isNewProduct"], true);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["imageUrl"], "https://cdn.example.com/lamp.png");
        assert_eq!(json["tags"], serde_json::json!([3, 4]));
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "p-9", "name": "Chair", "price": 40, "quantity": 1,
            "warranty": 0, "imageUrl": "https://cdn.example.com/c.png",
            "status": "DEACTIVE", "categoryId": 1, "brandId": 1
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.images.is_empty());
        assert!(product.tags.is_empty());
        assert_eq!(product.field("price").as_deref(), Some("40"));
        assert_eq!(product.field("salePrice"), None);
    }
}
