//! Gallery editor: one image URL per line.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::product::ProductImage;
use crate::domain::types::{ImageUrl, ProductImageId};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize)]
pub struct ProductImagesForm {
    #[serde(default)]
    pub images: String,
}

/// Normalized gallery: trimmed, non-empty, unique and valid URLs in the order
/// they were entered.
#[derive(Debug, PartialEq, Eq)]
pub struct ProductImagesPayload {
    pub urls: Vec<ImageUrl>,
}

impl TryFrom<ProductImagesForm> for ProductImagesPayload {
    type Error = FormError;

    fn try_from(form: ProductImagesForm) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for line in form.images.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || !seen.insert(trimmed) {
                continue;
            }
            let url = ImageUrl::new(trimmed)
                .map_err(|_| FormError::InvalidUrl(trimmed.to_string()))?;
            urls.push(url);
        }

        Ok(Self { urls })
    }
}

impl ProductImagesPayload {
    /// Pairs every URL with an image id, keeping the id of images already in
    /// `existing` and generating fresh ones for new URLs.
    pub fn into_images(self, existing: &[ProductImage]) -> Vec<ProductImage> {
        self.urls
            .into_iter()
            .map(|url| {
                let id = existing
                    .iter()
                    .find(|image| image.url == url.as_str())
                    .map(|image| image.id.clone())
                    .unwrap_or_else(ProductImageId::generate);
                ProductImage {
                    id,
                    url: url.into_inner(),
                }
            })
            .collect()
    }
}

/// Textarea content for an existing gallery.
pub fn images_to_text(images: &[ProductImage]) -> String {
    images
        .iter()
        .map(|image| image.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_deduplicated_and_ordered() {
        let form = ProductImagesForm {
            images: " https://cdn.example.com/b.png \n\nhttps://cdn.example.com/a.png\nhttps://cdn.example.com/b.png\n"
                .to_string(),
        };

        let payload = ProductImagesPayload::try_from(form).unwrap();
        let urls: Vec<&str> = payload.urls.iter().map(ImageUrl::as_str).collect();

        assert_eq!(
            urls,
            vec!["https://cdn.example.com/b.png", "https://cdn.example.com/a.png"]
        );
    }

    #[test]
    fn invalid_line_rejects_the_whole_gallery() {
        let form = ProductImagesForm {
            images: "https://cdn.example.com/a.png\nnot a url".to_string(),
        };

        assert!(matches!(
            ProductImagesPayload::try_from(form),
            Err(FormError::InvalidUrl(line)) if line == "not a url"
        ));
    }

    #[test]
    fn existing_images_keep_their_ids() {
        let existing = vec![ProductImage {
            id: ProductImageId::new("img-1").unwrap(),
            url: "https://cdn.example.com/a.png".to_string(),
        }];
        let form = ProductImagesForm {
            images: "https://cdn.example.com/a.png\nhttps://cdn.example.com/c.png".to_string(),
        };

        let images = ProductImagesPayload::try_from(form)
            .unwrap()
            .into_images(&existing);

        assert_eq!(images[0].id.as_str(), "img-1");
        assert_ne!(images[1].id.as_str(), "img-1");
        assert!(!images[1].id.as_str().is_empty());
        assert_eq!(images_to_text(&images).lines().count(), 2);
    }
}
