//! Payment link builders.
//!
//! # Responsibility
//! - Shape the gateway preference payload and the bank deep-link URI.
//!
//! # Invariants
//! - Amounts on links are rounded to 2 fractional digits; this is the
//!   only place display rounding leaks into data.
//! - `external_reference` round-trips unchanged through the gateway.

use crate::config::{BankSettings, GatewaySettings};
use rust_decimal::Decimal;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to produce a displayable payment link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Gateway did not answer or answered without a checkout link.
    /// The computed total stays valid and displayable.
    Unavailable(String),
    /// Building was skipped because deployment settings lack the named
    /// entry (access token, base URL, CBU alias).
    NotConfigured(&'static str),
}

impl Display for LinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "payment link unavailable: {reason}"),
            Self::NotConfigured(entry) => write!(f, "payment link not configured: {entry}"),
        }
    }
}

impl Error for LinkError {}

/// Input for one checkout link: what to charge and how to correlate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Reference correlating the link with a student/period. Uniqueness
    /// across concurrent invoices is the caller's responsibility.
    pub reference: String,
    pub total: Decimal,
}

/// External gateway collaborator.
///
/// One best-effort call per request; implementations map transport and
/// response-shape failures to [`LinkError::Unavailable`].
pub trait CheckoutLinkProvider {
    fn checkout_link(&self, request: &CheckoutRequest) -> Result<String, LinkError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceItem {
    pub title: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceBackUrls {
    pub success: String,
}

/// Gateway preference body for one checkout.
///
/// Matches the shape the gateway SDK expects; the HTTP call that submits
/// it is outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferencePayload {
    pub items: Vec<PreferenceItem>,
    pub external_reference: String,
    pub back_urls: PreferenceBackUrls,
    pub auto_return: String,
}

/// Builds the gateway preference body for a checkout request.
///
/// The success URL carries `ref` and `paid=true` so the return trip can
/// be detected by [`crate::payment::return_trip::ReturnSignal`].
pub fn preference_payload(request: &CheckoutRequest, base_url: &str) -> PreferencePayload {
    PreferencePayload {
        items: vec![PreferenceItem {
            title: format!("Pago {}", request.reference),
            quantity: 1,
            unit_price: request.total.round_dp(2),
        }],
        external_reference: request.reference.clone(),
        back_urls: PreferenceBackUrls {
            success: format!("{base_url}?ref={}&paid=true", request.reference),
        },
        auto_return: "approved".to_string(),
    }
}

/// Builds the gateway preference body when the deployment is fully
/// configured for checkout.
///
/// Both the access token and the base URL are required; the token
/// authenticates the SDK call and the base URL anchors the return trip.
///
/// # Errors
/// - [`LinkError::NotConfigured`] when either entry is missing.
pub fn gateway_preference(
    request: &CheckoutRequest,
    gateway: &GatewaySettings,
) -> Result<PreferencePayload, LinkError> {
    if gateway.access_token.is_none() {
        return Err(LinkError::NotConfigured("gateway access token"));
    }
    let base_url = gateway
        .base_url
        .as_deref()
        .ok_or(LinkError::NotConfigured("gateway base URL"))?;
    Ok(preference_payload(request, base_url))
}

/// Builds the bank deep-link when a CBU alias is configured.
///
/// # Errors
/// - [`LinkError::NotConfigured`] when the alias is missing.
pub fn bank_link(bank: &BankSettings, total: Decimal) -> Result<String, LinkError> {
    let alias = bank
        .cbu_alias
        .as_deref()
        .ok_or(LinkError::NotConfigured("bank CBU alias"))?;
    Ok(bank_transfer_uri(alias, total))
}

/// Builds the banking-app deep-link for a total payable.
pub fn bank_transfer_uri(cbu_alias: &str, total: Decimal) -> String {
    format!(
        "intent://pay?cbu={cbu_alias}&amount={:.2}#Intent;scheme=bankapp;package=com.bank.app;end",
        total.round_dp(2)
    )
}
