#![allow(dead_code)]

use instapay::adapters::instapay::InstaPay;
use instapay::domain::id::OrderId;
use instapay::domain::payment::{Order, ReturnUrls};
use instapay::domain::settings::{CURRENCIES, PAY, USE_SETUP};
use std::collections::HashMap;
use url::Url;

pub const NOTIFY_URL: &str = "https://s/n";
pub const CANCEL_URL: &str = "https://s/c";

/// Raw settings map as an operator would enter it.
pub fn raw_settings(pay: &str, use_setup: &str, currencies: &str) -> HashMap<String, String> {
    HashMap::from([
        (PAY.to_string(), pay.to_string()),
        (USE_SETUP.to_string(), use_setup.to_string()),
        (CURRENCIES.to_string(), currencies.to_string()),
    ])
}

pub fn configured(pay: &str, use_setup: &str) -> InstaPay {
    InstaPay::configured(raw_settings(pay, use_setup, "USD, EUR, GBP"))
}

/// Order 7 for 19.99 USD.
pub fn make_order() -> Order {
    Order {
        id: OrderId::new(7),
        total_price_including_tax: "19.99".parse().unwrap(),
        currency_code: "USD".to_string(),
    }
}

pub fn make_urls() -> ReturnUrls {
    ReturnUrls {
        notify: Url::parse(NOTIFY_URL).unwrap(),
        cancel: Url::parse(CANCEL_URL).unwrap(),
    }
}
