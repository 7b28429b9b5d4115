use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, Product, ProductFields, Products, UpdateProduct};
use crate::domain::types::{BrandId, CategoryId, ImageUrl, ProductId, Status, TagId};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

/// Product editor. Submitted with repeated `tags` keys, so it must be decoded
/// with `serde_html_form`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 500), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub sale_price: Option<f64>,
    #[validate(range(min = 0))]
    pub warranty: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(url)]
    pub image_url: String,
    #[serde(default)]
    pub is_new_product: bool,
    #[serde(default)]
    pub is_featured_product: bool,
    #[serde(default)]
    pub is_favorite_product: bool,
    #[serde(default)]
    #[validate(required)]
    pub category_id: Option<i32>,
    #[serde(default)]
    #[validate(required)]
    pub brand_id: Option<i32>,
    #[serde(default)]
    pub tags: Vec<i32>,
    #[serde(default)]
    pub status: Status,
}

impl ProductForm {
    fn into_fields(self) -> Result<ProductFields, FormError> {
        let category_id = CategoryId::new(self.category_id.unwrap_or_default())?;
        let brand_id = BrandId::new(self.brand_id.unwrap_or_default())?;
        let tags = self
            .tags
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let image_url =
            ImageUrl::new(self.image_url).map_err(|err| FormError::InvalidUrl(err.to_string()))?;

        Ok(ProductFields {
            name: self.name,
            description: Some(self.description),
            price: self.price,
            sale_price: self.sale_price,
            quantity: self.quantity,
            warranty: self.warranty,
            image_url,
            status: self.status,
            is_new_product: self.is_new_product,
            is_featured_product: self.is_featured_product,
            is_favorite_product: self.is_favorite_product,
            category_id,
            brand_id,
            tags,
        }
        .normalized())
    }
}

impl EntityForm for ProductForm {
    type Entity = Products;

    const NEEDS_LOOKUPS: bool = true;

    fn from_record(record: &Product) -> Self {
        Self {
            id: Some(record.id.to_string()),
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            price: record.price,
            sale_price: record.sale_price,
            warranty: record.warranty,
            quantity: record.quantity,
            image_url: record.image_url.clone(),
            is_new_product: record.is_new_product,
            is_featured_product: record.is_featured_product,
            is_favorite_product: record.is_favorite_product,
            category_id: Some(record.category_id).filter(|id| *id > 0),
            brand_id: Some(record.brand_id).filter(|id| *id > 0),
            tags: record.tags.clone(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<Products>, FormError> {
        let id = parse_optional_id::<ProductId>(self.id.as_deref())?;
        let fields = self.into_fields()?;
        Ok(match id {
            Some(id) => EditorMode::Edit(UpdateProduct { id, fields }),
            None => EditorMode::Create(NewProduct { fields }),
        })
    }

    fn fields(&self, lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::text("name", "Name", &self.name)
                .required()
                .max_length(500),
            FormField::text_area("description", "Description", &self.description),
            FormField::number("price", "Price", self.price)
                .required()
                .min(0)
                .step("0.01"),
            FormField::number(
                "sale_price",
                "Sale Price",
                self.sale_price.map(|p| p.to_string()).unwrap_or_default(),
            )
            .min(0)
            .step("0.01"),
            FormField::number("warranty", "Warranty", self.warranty)
                .required()
                .min(0),
            FormField::number("quantity", "Quantity", self.quantity)
                .required()
                .min(1),
            FormField::url("image_url", "Image Url", &self.image_url).required(),
            FormField::checkbox("is_new_product", "New", self.is_new_product),
            FormField::checkbox("is_featured_product", "Featured", self.is_featured_product),
            FormField::checkbox("is_favorite_product", "Favorite", self.is_favorite_product),
            FormField::select(
                "category_id",
                "Category",
                lookups.categories.clone(),
                self.category_id.map(|id| id.to_string()),
            )
            .required(),
            FormField::select(
                "brand_id",
                "Brand",
                lookups.brands.clone(),
                self.brand_id.map(|id| id.to_string()),
            )
            .required(),
            FormField::multi_select(
                "tags",
                "Tags",
                lookups.tags.clone(),
                self.tags.iter().map(ToString::to_string).collect(),
            ),
            FormField::select(
                "status",
                "Status",
                status_options::<Status>(),
                Some(self.status.to_string()),
            ),
        ]
    }
}
