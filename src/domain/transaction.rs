//! Transaction token codec.
//!
//! With no real portal behind the adapter, the token itself is the payment
//! record: `<nonce>;<price>;<status>`. Hosts must treat it as opaque. The
//! nonce is never read back; it only keeps tokens for identical
//! price/status pairs distinct.

use {
    super::error::AdapterError,
    super::money::Price,
    super::payment::PaymentStatus,
    uuid::Uuid,
};

const SEPARATOR: char = ';';

pub fn encode(price: Price, status: PaymentStatus) -> String {
    format!("{}{SEPARATOR}{price}{SEPARATOR}{status}", Uuid::new_v4())
}

pub fn decode(token: &str) -> Result<(Price, PaymentStatus), AdapterError> {
    let fields: Vec<&str> = token.split(SEPARATOR).collect();
    let [_nonce, price, status] = fields.as_slice() else {
        return Err(AdapterError::Format(format!(
            "transaction must have 3 fields, got {}",
            fields.len()
        )));
    };

    let price = price.parse::<Price>()?;
    let status = PaymentStatus::try_from(*status)?;
    Ok((price, status))
}
