use serde::{Deserialize, Serialize};

/// Domain representation of one line item inside a container.
///
/// A product never exists outside its parent container and is only ever
/// addressed through the `(container_id, product_id)` pair.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the parent container; immutable after creation.
    pub id: i64,
    /// Human-readable name of the product.
    pub name: String,
    /// Ordered quantity, kept as the client-supplied string.
    pub quantity: String,
    /// Total price for the whole quantity.
    pub total_price: String,
    /// ISO 4217 currency code for the total price.
    pub total_price_currency: String,
    /// Volume of the product in cubic meters.
    #[serde(default)]
    pub product_cbm: String,
    /// Customs duty rate applied to this product, in percent.
    #[serde(default)]
    pub customs_duty_percent: String,
    /// URLs of files attached to this product.
    #[serde(default)]
    pub file_urls: Vec<String>,
}

/// Payload used both to create a product and to replace one on update.
///
/// An update swaps the entire body but must keep the original id, so the
/// id is supplied separately in [`NewProduct::into_product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: String,
    pub total_price: String,
    pub total_price_currency: String,
    pub product_cbm: String,
    pub customs_duty_percent: String,
    pub file_urls: Vec<String>,
}

impl NewProduct {
    /// Materializes the payload into a product with the given id.
    pub fn into_product(self, id: i64) -> Product {
        let NewProduct {
            name,
            quantity,
            total_price,
            total_price_currency,
            product_cbm,
            customs_duty_percent,
            file_urls,
        } = self;

        Product {
            id,
            name,
            quantity,
            total_price,
            total_price_currency,
            product_cbm,
            customs_duty_percent,
            file_urls,
        }
    }
}
