use {
    super::error::AdapterError,
    super::payment::{FormValues, Order, PaymentInfo, PreparedPayment, ReturnUrls},
    super::settings::SettingsField,
    std::collections::HashMap,
};

/// Static metadata the host shows before a method is configured.
pub trait PaymentMethodDescription {
    fn user_friendly_name(&self) -> &'static str;

    fn settings_description(&self) -> Vec<SettingsField>;
}

/// What a host storefront calls on a payment method, in lifecycle order.
///
/// Everything except `configure` and `validate_settings` requires a prior
/// successful `configure` and fails with [`AdapterError::NotConfigured`]
/// otherwise.
pub trait PaymentMethod: Send + Sync {
    fn configure(&mut self, settings: HashMap<String, String>);

    /// Checks a settings map without applying it. Returns user-facing messages.
    fn validate_settings(&self, locale: &str, settings: HashMap<String, String>) -> Vec<String>;

    fn is_currency_supported(&self, code: &str) -> Result<bool, AdapterError>;

    /// HTML fragment for the optional setup step, `None` when not needed.
    fn create_setup_form(&self, order: &Order, locale: &str)
    -> Result<Option<String>, AdapterError>;

    fn validate_setup_form(
        &self,
        order: &Order,
        locale: &str,
        form: &FormValues,
    ) -> Result<Vec<String>, AdapterError>;

    fn prepare_payment(
        &self,
        order: &Order,
        locale: &str,
        urls: &ReturnUrls,
        setup_form: Option<&FormValues>,
    ) -> Result<PreparedPayment, AdapterError>;

    /// Resolves stored transaction ids to payment statuses. The result does
    /// not have to be one-to-one with `transactions`.
    fn check_payment_status(
        &self,
        order: &Order,
        transactions: &[String],
    ) -> Result<Vec<PaymentInfo>, AdapterError>;
}
