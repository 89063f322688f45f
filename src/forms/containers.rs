use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::container::{NewContainer, UpdateContainer};
use crate::forms::{default_currency, double_option};

fn default_exchange_rate() -> String {
    "4.0".to_string()
}

/// JSON payload accepted when creating a container.
///
/// `name`, `orderDate` and `productionDays` are required and must be
/// non-empty; everything else falls back to the documented defaults.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub order_date: String,
    #[validate(length(min = 1))]
    pub production_days: String,
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub container_cost: String,
    #[serde(default = "default_currency")]
    pub container_cost_currency: String,
    #[serde(default)]
    pub customs_clearance_cost: String,
    #[serde(default = "default_currency")]
    pub customs_clearance_cost_currency: String,
    #[serde(default)]
    pub transport_china_cost: String,
    #[serde(default = "default_currency")]
    pub transport_china_cost_currency: String,
    #[serde(default)]
    pub transport_poland_cost: String,
    #[serde(default = "default_currency")]
    pub transport_poland_cost_currency: String,
    #[serde(default)]
    pub insurance_cost: String,
    #[serde(default = "default_currency")]
    pub insurance_cost_currency: String,
    #[serde(default)]
    pub total_transport_cbm: String,
    #[serde(default)]
    pub additional_costs: String,
    #[serde(default = "default_currency")]
    pub additional_costs_currency: String,
    #[serde(default)]
    pub picked_up_in_china: bool,
    #[serde(default)]
    pub customs_clearance_done: bool,
    #[serde(default)]
    pub delivered_to_warehouse: bool,
    #[serde(default)]
    pub documents_in_system: bool,
}

impl CreateContainerForm {
    /// Validates the payload and converts it into a domain `NewContainer`.
    pub fn into_new_container(self) -> Result<NewContainer, ValidationErrors> {
        self.validate()?;

        let CreateContainerForm {
            name,
            order_date,
            production_days,
            exchange_rate,
            payment_date,
            delivery_date,
            container_cost,
            container_cost_currency,
            customs_clearance_cost,
            customs_clearance_cost_currency,
            transport_china_cost,
            transport_china_cost_currency,
            transport_poland_cost,
            transport_poland_cost_currency,
            insurance_cost,
            insurance_cost_currency,
            total_transport_cbm,
            additional_costs,
            additional_costs_currency,
            picked_up_in_china,
            customs_clearance_done,
            delivered_to_warehouse,
            documents_in_system,
        } = self;

        Ok(NewContainer {
            name,
            order_date,
            production_days,
            exchange_rate,
            payment_date,
            delivery_date,
            container_cost,
            container_cost_currency,
            customs_clearance_cost,
            customs_clearance_cost_currency,
            transport_china_cost,
            transport_china_cost_currency,
            transport_poland_cost,
            transport_poland_cost_currency,
            insurance_cost,
            insurance_cost_currency,
            total_transport_cbm,
            additional_costs,
            additional_costs_currency,
            picked_up_in_china,
            customs_clearance_done,
            delivered_to_warehouse,
            documents_in_system,
        })
    }
}

/// JSON payload accepted when updating a container.
///
/// Every key is optional; an omitted key keeps the stored value. The two
/// nullable dates go through [`double_option`] so `"paymentDate": null`
/// clears the field while leaving the key out preserves it. An explicit
/// `null` on any non-nullable field is tolerated and treated the same as an
/// omitted key, since those fields have no "cleared" state. `pickupDate`
/// and `products` are not accepted here: the former is derived, the latter
/// is managed through the product endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerForm {
    pub name: Option<String>,
    pub order_date: Option<String>,
    pub production_days: Option<String>,
    pub exchange_rate: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_date: Option<Option<String>>,
    pub container_cost: Option<String>,
    pub container_cost_currency: Option<String>,
    pub customs_clearance_cost: Option<String>,
    pub customs_clearance_cost_currency: Option<String>,
    pub transport_china_cost: Option<String>,
    pub transport_china_cost_currency: Option<String>,
    pub transport_poland_cost: Option<String>,
    pub transport_poland_cost_currency: Option<String>,
    pub insurance_cost: Option<String>,
    pub insurance_cost_currency: Option<String>,
    pub total_transport_cbm: Option<String>,
    pub additional_costs: Option<String>,
    pub additional_costs_currency: Option<String>,
    pub picked_up_in_china: Option<bool>,
    pub customs_clearance_done: Option<bool>,
    pub delivered_to_warehouse: Option<bool>,
    pub documents_in_system: Option<bool>,
}

impl UpdateContainerForm {
    /// Converts the payload into a domain `UpdateContainer` patch.
    pub fn into_update_container(self) -> UpdateContainer {
        let UpdateContainerForm {
            name,
            order_date,
            production_days,
            exchange_rate,
            payment_date,
            delivery_date,
            container_cost,
            container_cost_currency,
            customs_clearance_cost,
            customs_clearance_cost_currency,
            transport_china_cost,
            transport_china_cost_currency,
            transport_poland_cost,
            transport_poland_cost_currency,
            insurance_cost,
            insurance_cost_currency,
            total_transport_cbm,
            additional_costs,
            additional_costs_currency,
            picked_up_in_china,
            customs_clearance_done,
            delivered_to_warehouse,
            documents_in_system,
        } = self;

        UpdateContainer {
            name,
            order_date,
            production_days,
            exchange_rate,
            payment_date,
            delivery_date,
            container_cost,
            container_cost_currency,
            customs_clearance_cost,
            customs_clearance_cost_currency,
            transport_china_cost,
            transport_china_cost_currency,
            transport_poland_cost,
            transport_poland_cost_currency,
            insurance_cost,
            insurance_cost_currency,
            total_transport_cbm,
            additional_costs,
            additional_costs_currency,
            picked_up_in_china,
            customs_clearance_done,
            delivered_to_warehouse,
            documents_in_system,
        }
    }
}
