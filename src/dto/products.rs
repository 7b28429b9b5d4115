use serde::Serialize;

use crate::domain::product::Product;
use crate::forms::product_images::images_to_text;

/// Data required to render the gallery editor of a product.
#[derive(Debug, Serialize)]
pub struct ImagesView {
    pub product_id: String,
    pub product_name: String,
    pub cover_url: String,
    /// One URL per line.
    pub images_text: String,
    pub thumbnails: Vec<String>,
    pub errors: Vec<String>,
}

impl ImagesView {
    pub fn new(product: &Product, images_text: Option<String>, errors: Vec<String>) -> Self {
        Self {
            product_id: product.id.to_string(),
            product_name: product.name.clone(),
            cover_url: product.image_url.clone(),
            images_text: images_text.unwrap_or_else(|| images_to_text(&product.images)),
            thumbnails: product.images.iter().map(|image| image.url.clone()).collect(),
            errors,
        }
    }
}
