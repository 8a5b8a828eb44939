use {
    super::error::AdapterError,
    super::id::OrderId,
    super::money::Price,
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fmt},
    url::Url,
};

/// Raw name/value pairs posted back from a setup form.
pub type FormValues = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Success,
    Cancelled,
}

impl PaymentStatus {
    /// Canonical name, as written into transaction tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = AdapterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Success" => Ok(Self::Success),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(AdapterError::UnknownStatus(other.to_string())),
        }
    }
}

/// Order as seen by the payment method. Owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub total_price_including_tax: Price,
    pub currency_code: String,
}

/// Where the shopper's browser goes after the portal round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnUrls {
    pub notify: Url,
    pub cancel: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFormField {
    pub name: String,
    pub value: String,
}

impl PaymentFormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// HTTP form the host renders and submits on the shopper's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub method: FormMethod,
    pub target_url: Url,
    pub fields: Vec<PaymentFormField>,
}

impl PaymentForm {
    pub fn post(target_url: Url, fields: Vec<PaymentFormField>) -> Self {
        Self {
            method: FormMethod::Post,
            target_url,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Result of payment preparation. `transaction_id` is the only thing the
/// host needs to persist for this attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPayment {
    pub form: PaymentForm,
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub order_id: OrderId,
    pub transaction_id: String,
    pub price: Price,
    pub currency_code: String,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_roundtrip() {
        for status in [PaymentStatus::Success, PaymentStatus::Cancelled] {
            assert_eq!(PaymentStatus::try_from(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(
            PaymentStatus::try_from("success"),
            Err(AdapterError::UnknownStatus("success".into()))
        );
    }

    #[test]
    fn form_field_lookup() {
        let form = PaymentForm::post(
            Url::parse("https://shop.example/notify").unwrap(),
            vec![PaymentFormField::new("price", "10.00")],
        );
        assert_eq!(form.field("price"), Some("10.00"));
        assert_eq!(form.field("orderId"), None);
        assert_eq!(form.method, FormMethod::Post);
    }
}
