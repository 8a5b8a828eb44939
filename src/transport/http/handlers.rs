use {
    super::errors::ApiError,
    crate::{
        AppState,
        domain::{
            method::{PaymentMethod, PaymentMethodDescription},
            payment::{FormValues, Order, PaymentInfo, PreparedPayment, ReturnUrls},
        },
    },
    axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
    },
    serde::Deserialize,
    std::collections::HashMap,
};

#[derive(Debug, Deserialize)]
pub struct ValidateSettingsRequest {
    #[serde(default)]
    pub locale: String,
    pub settings: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SetupFormRequest {
    pub order: Order,
    #[serde(default)]
    pub locale: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateSetupFormRequest {
    pub order: Order,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub form: FormValues,
}

#[derive(Debug, Deserialize)]
pub struct PreparePaymentRequest {
    pub order: Order,
    #[serde(default)]
    pub locale: String,
    pub urls: ReturnUrls,
    pub setup_form: Option<FormValues>,
}

#[derive(Debug, Deserialize)]
pub struct CheckStatusRequest {
    pub order: Order,
    pub transactions: Vec<String>,
}

pub async fn description(State(state): State<AppState>) -> Json<serde_json::Value> {
    let method = state.method.read().await;
    Json(serde_json::json!({
        "name": method.user_friendly_name(),
        "settings": method.settings_description(),
    }))
}

/// Replaces the active settings if they validate.
#[tracing::instrument(name = "configure", skip_all)]
pub async fn configure(
    State(state): State<AppState>,
    Json(settings): Json<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut method = state.method.write().await;
    let errors = method.validate_settings("", settings.clone());
    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "rejected invalid settings");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "errors": errors })),
        );
    }

    method.configure(settings);
    tracing::info!("payment method configured");
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "configured" })),
    )
}

pub async fn validate_settings(
    State(state): State<AppState>,
    Json(req): Json<ValidateSettingsRequest>,
) -> Json<serde_json::Value> {
    let method = state.method.read().await;
    let errors = method.validate_settings(&req.locale, req.settings);
    Json(serde_json::json!({ "errors": errors }))
}

pub async fn currency_supported(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let method = state.method.read().await;
    let supported = method.is_currency_supported(&code)?;
    Ok(Json(serde_json::json!({ "code": code, "supported": supported })))
}

pub async fn create_setup_form(
    State(state): State<AppState>,
    Json(req): Json<SetupFormRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let method = state.method.read().await;
    let html = method.create_setup_form(&req.order, &req.locale)?;
    Ok(Json(serde_json::json!({ "html": html })))
}

pub async fn validate_setup_form(
    State(state): State<AppState>,
    Json(req): Json<ValidateSetupFormRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let method = state.method.read().await;
    let errors = method.validate_setup_form(&req.order, &req.locale, &req.form)?;
    Ok(Json(serde_json::json!({ "errors": errors })))
}

#[tracing::instrument(
    name = "prepare_payment",
    skip_all,
    fields(order_id = tracing::field::Empty)
)]
pub async fn prepare_payment(
    State(state): State<AppState>,
    Json(req): Json<PreparePaymentRequest>,
) -> Result<Json<PreparedPayment>, ApiError> {
    tracing::Span::current().record("order_id", tracing::field::display(&req.order.id));

    let method = state.method.read().await;
    let prepared =
        method.prepare_payment(&req.order, &req.locale, &req.urls, req.setup_form.as_ref())?;
    Ok(Json(prepared))
}

#[tracing::instrument(
    name = "check_payment_status",
    skip_all,
    fields(order_id = tracing::field::Empty, count = tracing::field::Empty)
)]
pub async fn check_payment_status(
    State(state): State<AppState>,
    Json(req): Json<CheckStatusRequest>,
) -> Result<Json<Vec<PaymentInfo>>, ApiError> {
    tracing::Span::current()
        .record("order_id", tracing::field::display(&req.order.id))
        .record("count", req.transactions.len());

    let method = state.method.read().await;
    let infos = method.check_payment_status(&req.order, &req.transactions)?;
    Ok(Json(infos))
}
