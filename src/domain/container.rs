use serde::{Deserialize, Serialize};

use crate::domain::pickup::pickup_date;
use crate::domain::product::Product;

/// Domain representation of one tracked import shipment.
///
/// Cost and quantity fields are kept as the client-supplied strings; the
/// backend never does arithmetic on them. `pickup_date` is the only derived
/// field and is recomputed on every write, never accepted from the client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Unique identifier assigned at creation; immutable afterwards.
    pub id: i64,
    /// Human-readable name of the shipment.
    pub name: String,
    /// Date the order was placed, `YYYY-MM-DD`.
    pub order_date: String,
    /// Production duration in days, possibly fractional.
    pub production_days: String,
    /// Exchange rate used for cost conversion.
    pub exchange_rate: String,
    /// Date the order was paid, if known.
    pub payment_date: Option<String>,
    /// Date the shipment arrived, if known.
    pub delivery_date: Option<String>,
    pub container_cost: String,
    pub container_cost_currency: String,
    pub customs_clearance_cost: String,
    pub customs_clearance_cost_currency: String,
    pub transport_china_cost: String,
    pub transport_china_cost_currency: String,
    pub transport_poland_cost: String,
    pub transport_poland_cost_currency: String,
    pub insurance_cost: String,
    pub insurance_cost_currency: String,
    /// Total transported volume in cubic meters.
    pub total_transport_cbm: String,
    pub additional_costs: String,
    pub additional_costs_currency: String,
    /// Milestone flags. Independent toggles; no ordering is enforced.
    pub picked_up_in_china: bool,
    pub customs_clearance_done: bool,
    pub delivered_to_warehouse: bool,
    pub documents_in_system: bool,
    /// Derived: order date plus production days, or `None` when unknown.
    pub pickup_date: Option<String>,
    /// Embedded products in insertion order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Container {
    /// Applies a partial update to the container's own scalar fields.
    ///
    /// Fields absent from the patch are left untouched; `products` is never
    /// part of a patch and survives verbatim. The pickup date is recomputed
    /// unconditionally from the post-merge order date and production days.
    pub fn apply(&mut self, updates: &UpdateContainer) {
        let UpdateContainer {
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
        } = updates;

        if let Some(value) = name {
            self.name = value.clone();
        }
        if let Some(value) = order_date {
            self.order_date = value.clone();
        }
        if let Some(value) = production_days {
            self.production_days = value.clone();
        }
        if let Some(value) = exchange_rate {
            self.exchange_rate = value.clone();
        }
        if let Some(value) = payment_date {
            self.payment_date = value.clone();
        }
        if let Some(value) = delivery_date {
            self.delivery_date = value.clone();
        }
        if let Some(value) = container_cost {
            self.container_cost = value.clone();
        }
        if let Some(value) = container_cost_currency {
            self.container_cost_currency = value.clone();
        }
        if let Some(value) = customs_clearance_cost {
            self.customs_clearance_cost = value.clone();
        }
        if let Some(value) = customs_clearance_cost_currency {
            self.customs_clearance_cost_currency = value.clone();
        }
        if let Some(value) = transport_china_cost {
            self.transport_china_cost = value.clone();
        }
        if let Some(value) = transport_china_cost_currency {
            self.transport_china_cost_currency = value.clone();
        }
        if let Some(value) = transport_poland_cost {
            self.transport_poland_cost = value.clone();
        }
        if let Some(value) = transport_poland_cost_currency {
            self.transport_poland_cost_currency = value.clone();
        }
        if let Some(value) = insurance_cost {
            self.insurance_cost = value.clone();
        }
        if let Some(value) = insurance_cost_currency {
            self.insurance_cost_currency = value.clone();
        }
        if let Some(value) = total_transport_cbm {
            self.total_transport_cbm = value.clone();
        }
        if let Some(value) = additional_costs {
            self.additional_costs = value.clone();
        }
        if let Some(value) = additional_costs_currency {
            self.additional_costs_currency = value.clone();
        }
        if let Some(value) = picked_up_in_china {
            self.picked_up_in_china = *value;
        }
        if let Some(value) = customs_clearance_done {
            self.customs_clearance_done = *value;
        }
        if let Some(value) = delivered_to_warehouse {
            self.delivered_to_warehouse = *value;
        }
        if let Some(value) = documents_in_system {
            self.documents_in_system = *value;
        }

        self.pickup_date = pickup_date(&self.order_date, &self.production_days);
    }
}

/// Payload required to create a new container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContainer {
    pub name: String,
    pub order_date: String,
    pub production_days: String,
    pub exchange_rate: String,
    pub payment_date: Option<String>,
    pub delivery_date: Option<String>,
    pub container_cost: String,
    pub container_cost_currency: String,
    pub customs_clearance_cost: String,
    pub customs_clearance_cost_currency: String,
    pub transport_china_cost: String,
    pub transport_china_cost_currency: String,
    pub transport_poland_cost: String,
    pub transport_poland_cost_currency: String,
    pub insurance_cost: String,
    pub insurance_cost_currency: String,
    pub total_transport_cbm: String,
    pub additional_costs: String,
    pub additional_costs_currency: String,
    pub picked_up_in_china: bool,
    pub customs_clearance_done: bool,
    pub delivered_to_warehouse: bool,
    pub documents_in_system: bool,
}

impl NewContainer {
    /// Materializes the payload into a container with the given id, an empty
    /// product list and a freshly derived pickup date.
    pub fn into_container(self, id: i64) -> Container {
        let NewContainer {
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

        let pickup_date = pickup_date(&order_date, &production_days);

        Container {
            id,
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
            pickup_date,
            products: Vec::new(),
        }
    }
}

/// Patch applied when updating an existing container.
///
/// Every field is optional so that an omitted key leaves the stored value
/// untouched. The two nullable dates use a double `Option` so that an
/// explicit `null` (clear the field) is distinguishable from an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateContainer {
    pub name: Option<String>,
    pub order_date: Option<String>,
    pub production_days: Option<String>,
    pub exchange_rate: Option<String>,
    pub payment_date: Option<Option<String>>,
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
