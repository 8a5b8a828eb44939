use {
    crate::domain::{
        error::AdapterError,
        method::{PaymentMethod, PaymentMethodDescription},
        payment::{
            FormValues, Order, PaymentForm, PaymentFormField, PaymentInfo, PaymentStatus,
            PreparedPayment, ReturnUrls,
        },
        settings::{Settings, SettingsField},
        transaction,
    },
    std::collections::HashMap,
};

pub const NAME: &str = "InstaPay";
pub const SETUP_PARAMETER: &str = "SomeParameter";
pub const SETUP_PARAMETER_MISSING: &str = "There should be something filled.";

/// Stand-in payment method: no portal is contacted, the outcome is taken
/// from the `Pay` setting and carried inside the transaction token.
#[derive(Debug, Clone, Default)]
pub struct InstaPay {
    settings: Option<Settings>,
}

impl InstaPay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configured(settings: HashMap<String, String>) -> Self {
        let mut method = Self::new();
        method.configure(settings);
        method
    }

    pub fn is_configured(&self) -> bool {
        self.settings.is_some()
    }

    fn settings(&self) -> Result<&Settings, AdapterError> {
        self.settings.as_ref().ok_or(AdapterError::NotConfigured)
    }

    fn outcome(settings: &Settings) -> Result<PaymentStatus, AdapterError> {
        Ok(if settings.pay()? {
            PaymentStatus::Success
        } else {
            PaymentStatus::Cancelled
        })
    }

    fn form_fields(
        settings: &Settings,
        order: &Order,
        setup_form: Option<&FormValues>,
    ) -> Result<Vec<PaymentFormField>, AdapterError> {
        let mut fields = vec![
            PaymentFormField::new("orderId", order.id.to_string()),
            PaymentFormField::new("price", order.total_price_including_tax.to_string()),
            PaymentFormField::new("currencyCode", order.currency_code.as_str()),
        ];
        if settings.use_setup()? {
            let form = setup_form.ok_or_else(|| {
                AdapterError::Precondition("setup is enabled but no setup form was passed".into())
            })?;
            let value = form.get(SETUP_PARAMETER).map(String::as_str).unwrap_or("");
            fields.push(PaymentFormField::new(SETUP_PARAMETER, value));
        }
        Ok(fields)
    }
}

impl PaymentMethodDescription for InstaPay {
    fn user_friendly_name(&self) -> &'static str {
        NAME
    }

    fn settings_description(&self) -> Vec<SettingsField> {
        Settings::description()
    }
}

impl PaymentMethod for InstaPay {
    fn configure(&mut self, settings: HashMap<String, String>) {
        let settings = Settings::parse(settings);
        if !settings.is_valid() {
            tracing::warn!("configured with settings that do not validate");
        }
        self.settings = Some(settings);
    }

    fn validate_settings(&self, _locale: &str, settings: HashMap<String, String>) -> Vec<String> {
        Settings::parse(settings).validate()
    }

    fn is_currency_supported(&self, code: &str) -> Result<bool, AdapterError> {
        self.settings()?.supports_currency(code)
    }

    fn create_setup_form(
        &self,
        _order: &Order,
        _locale: &str,
    ) -> Result<Option<String>, AdapterError> {
        if !self.settings()?.use_setup()? {
            return Ok(None);
        }
        Ok(Some(format!(
            "<input type='text' name='{SETUP_PARAMETER}' required />"
        )))
    }

    fn validate_setup_form(
        &self,
        _order: &Order,
        _locale: &str,
        form: &FormValues,
    ) -> Result<Vec<String>, AdapterError> {
        let use_setup = self
            .settings()?
            .use_setup()
            .map_err(|e| AdapterError::Precondition(format!("setup form state unknown: {e}")))?;
        if !use_setup {
            return Err(AdapterError::Precondition(
                "setup form validation requested but no setup form is in use".into(),
            ));
        }
        if form.get(SETUP_PARAMETER).is_none_or(|v| v.is_empty()) {
            return Ok(vec![SETUP_PARAMETER_MISSING.to_string()]);
        }
        Ok(Vec::new())
    }

    fn prepare_payment(
        &self,
        order: &Order,
        _locale: &str,
        urls: &ReturnUrls,
        setup_form: Option<&FormValues>,
    ) -> Result<PreparedPayment, AdapterError> {
        let settings = self.settings()?;
        let errors = settings.validate();
        if !errors.is_empty() {
            return Err(AdapterError::Configuration(errors.join(" ")));
        }

        let status = Self::outcome(settings)?;
        let target = match status {
            PaymentStatus::Success => urls.notify.clone(),
            PaymentStatus::Cancelled => urls.cancel.clone(),
        };
        let fields = Self::form_fields(settings, order, setup_form)?;
        let transaction_id = transaction::encode(order.total_price_including_tax, status);

        tracing::info!(order_id = %order.id, %status, "payment prepared");

        Ok(PreparedPayment {
            form: PaymentForm::post(target, fields),
            transaction_id,
        })
    }

    fn check_payment_status(
        &self,
        order: &Order,
        transactions: &[String],
    ) -> Result<Vec<PaymentInfo>, AdapterError> {
        self.settings()?;

        let infos = transactions
            .iter()
            .map(|transaction_id| {
                let (price, status) = transaction::decode(transaction_id)?;
                Ok(PaymentInfo {
                    order_id: order.id,
                    transaction_id: transaction_id.clone(),
                    price,
                    currency_code: order.currency_code.clone(),
                    status,
                })
            })
            .collect::<Result<Vec<_>, AdapterError>>()?;

        tracing::debug!(order_id = %order.id, count = infos.len(), "payment status checked");
        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{id::OrderId, settings},
        url::Url,
    };

    fn raw(pay: &str, use_setup: &str) -> HashMap<String, String> {
        HashMap::from([
            (settings::PAY.to_string(), pay.to_string()),
            (settings::USE_SETUP.to_string(), use_setup.to_string()),
            (settings::CURRENCIES.to_string(), "USD".to_string()),
        ])
    }

    fn order() -> Order {
        Order {
            id: OrderId::new(1),
            total_price_including_tax: "10.00".parse().unwrap(),
            currency_code: "USD".into(),
        }
    }

    fn urls() -> ReturnUrls {
        ReturnUrls {
            notify: Url::parse("https://shop.example/notify").unwrap(),
            cancel: Url::parse("https://shop.example/cancel").unwrap(),
        }
    }

    #[test]
    fn unconfigured_calls_fail() {
        let method = InstaPay::new();
        assert_eq!(
            method.is_currency_supported("USD"),
            Err(AdapterError::NotConfigured)
        );
        assert_eq!(
            method.create_setup_form(&order(), "en"),
            Err(AdapterError::NotConfigured)
        );
        assert_eq!(
            method.validate_setup_form(&order(), "en", &FormValues::new()),
            Err(AdapterError::NotConfigured)
        );
        assert_eq!(
            method.prepare_payment(&order(), "en", &urls(), None),
            Err(AdapterError::NotConfigured)
        );
        assert_eq!(
            method.check_payment_status(&order(), &[]),
            Err(AdapterError::NotConfigured)
        );
    }

    #[test]
    fn validate_settings_needs_no_configuration() {
        let method = InstaPay::new();
        assert!(method.validate_settings("en", raw("true", "false")).is_empty());
        assert_eq!(method.validate_settings("en", raw("x", "false")).len(), 1);
    }

    #[test]
    fn invalid_settings_block_preparation() {
        let method = InstaPay::configured(raw("yes", "false"));
        assert!(method.is_configured());
        assert!(matches!(
            method.prepare_payment(&order(), "en", &urls(), None),
            Err(AdapterError::Configuration(_))
        ));
    }

    #[test]
    fn setup_parameter_is_forwarded() {
        let method = InstaPay::configured(raw("true", "true"));
        let form = FormValues::from([(SETUP_PARAMETER.to_string(), "abc".to_string())]);
        let prepared = method
            .prepare_payment(&order(), "en", &urls(), Some(&form))
            .unwrap();
        assert_eq!(prepared.form.field(SETUP_PARAMETER), Some("abc"));
        assert_eq!(prepared.form.fields.len(), 4);
    }

    #[test]
    fn setup_enabled_without_form_is_rejected() {
        let method = InstaPay::configured(raw("true", "true"));
        assert!(matches!(
            method.prepare_payment(&order(), "en", &urls(), None),
            Err(AdapterError::Precondition(_))
        ));
    }

    #[test]
    fn setup_form_ignored_when_setup_disabled() {
        let method = InstaPay::configured(raw("true", "false"));
        let form = FormValues::from([(SETUP_PARAMETER.to_string(), "abc".to_string())]);
        let prepared = method
            .prepare_payment(&order(), "en", &urls(), Some(&form))
            .unwrap();
        assert_eq!(prepared.form.field(SETUP_PARAMETER), None);
    }

    #[test]
    fn malformed_setup_flag_fails_setup_validation_as_precondition() {
        let method = InstaPay::configured(raw("true", "maybe"));
        let form = FormValues::from([(SETUP_PARAMETER.to_string(), "abc".to_string())]);
        assert!(matches!(
            method.validate_setup_form(&order(), "en", &form),
            Err(AdapterError::Precondition(_))
        ));
    }

    #[test]
    fn bad_token_fails_whole_check() {
        let method = InstaPay::configured(raw("true", "false"));
        let result = method.check_payment_status(
            &order(),
            &["n;1.00;Success".to_string(), "garbage".to_string()],
        );
        assert!(matches!(result, Err(AdapterError::Format(_))));
    }

    #[test]
    fn description() {
        let method = InstaPay::new();
        assert_eq!(method.user_friendly_name(), "InstaPay");
        assert_eq!(method.settings_description().len(), 3);
    }
}
