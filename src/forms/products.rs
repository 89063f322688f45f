use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::forms::default_currency;

/// JSON payload accepted when creating or replacing a product.
///
/// The same shape serves both operations because a product update replaces
/// the whole body; only the id survives, and that never travels in the body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub quantity: String,
    pub total_price: String,
    #[serde(default = "default_currency")]
    pub total_price_currency: String,
    #[serde(default)]
    pub product_cbm: String,
    #[serde(default)]
    pub customs_duty_percent: String,
    #[serde(default)]
    pub file_urls: Vec<String>,
}

impl ProductForm {
    /// Validates the payload and converts it into a domain `NewProduct`.
    pub fn into_new_product(self) -> Result<NewProduct, ValidationErrors> {
        self.validate()?;

        let ProductForm {
            name,
            quantity,
            total_price,
            total_price_currency,
            product_cbm,
            customs_duty_percent,
            file_urls,
        } = self;

        Ok(NewProduct {
            name,
            quantity,
            total_price,
            total_price_currency,
            product_cbm,
            customs_duty_percent,
            file_urls,
        })
    }
}
