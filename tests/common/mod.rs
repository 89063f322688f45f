//! Helpers for integration tests.

use import_tracker::domain::container::NewContainer;
use import_tracker::domain::product::NewProduct;

/// Container payload with the documented defaults filled in.
pub fn sample_new_container(name: &str) -> NewContainer {
    NewContainer {
        name: name.to_string(),
        order_date: "2023-01-01".to_string(),
        production_days: "10".to_string(),
        exchange_rate: "4.0".to_string(),
        payment_date: None,
        delivery_date: None,
        container_cost: String::new(),
        container_cost_currency: "USD".to_string(),
        customs_clearance_cost: String::new(),
        customs_clearance_cost_currency: "USD".to_string(),
        transport_china_cost: String::new(),
        transport_china_cost_currency: "USD".to_string(),
        transport_poland_cost: String::new(),
        transport_poland_cost_currency: "USD".to_string(),
        insurance_cost: String::new(),
        insurance_cost_currency: "USD".to_string(),
        total_transport_cbm: String::new(),
        additional_costs: String::new(),
        additional_costs_currency: "USD".to_string(),
        picked_up_in_china: false,
        customs_clearance_done: false,
        delivered_to_warehouse: false,
        documents_in_system: false,
    }
}

/// Product payload with the documented defaults filled in.
pub fn sample_new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        quantity: "100".to_string(),
        total_price: "5000".to_string(),
        total_price_currency: "USD".to_string(),
        product_cbm: String::new(),
        customs_duty_percent: String::new(),
        file_urls: Vec::new(),
    }
}
