//! # Domain Types
//!
//! Core domain types used throughout the storefront engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Order       │   │  PersonalData   │   │ ExchangeRateSnapshot│   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ────────────────── │   │
//! │  │  order_id       │   │  first_name     │   │  average_price      │   │
//! │  │  items snapshot │   │  email          │   │  max_price          │   │
//! │  │  total_cents    │   │  dni            │   │  source_name        │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Currency     │   │ PaymentMethod   │   │   ShippingMethod    │   │
//! │  │  Ars / Usdt     │   │  Transfer       │   │  Pickup (free)      │   │
//! │  │                 │   │  Mercadopago    │   │  Viacargo (fixed)   │   │
//! │  │                 │   │  Usdt           │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Currency/Payment Invariant
//! The pair `(currency, payment_method)` is always one of:
//! `(USDT, transfer)`, `(USDT, usdt)`, `(ARS, transfer)`, `(ARS, mercadopago)`.
//! [`PaymentMethod::allows`] encodes the set; [`PaymentMethod::corrected_for`]
//! repairs the pair on currency changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// Settlement/display currency selected at checkout.
///
/// USDT is the canonical base unit: catalog prices and cart arithmetic are
/// stored in it. ARS is a display/settlement conversion at the current
/// exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Argentine peso, converted at the snapshot's max price.
    Ars,
    /// Tether - the base unit for all stored amounts.
    Usdt,
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usdt
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Ars => write!(f, "ARS"),
            Currency::Usdt => write!(f, "USDT"),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the buyer settles the order.
///
/// There is no gateway behind any of these - the selection changes displayed
/// text and the WhatsApp handoff template only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Bank transfer. Settles in ARS or USDT.
    Transfer,
    /// Mercado Pago. ARS only.
    Mercadopago,
    /// USDT on-chain payment. USDT only.
    Usdt,
}

impl PaymentMethod {
    /// Whether this method can settle in the given currency.
    pub const fn allows(&self, currency: Currency) -> bool {
        match (self, currency) {
            (PaymentMethod::Transfer, _) => true,
            (PaymentMethod::Mercadopago, Currency::Ars) => true,
            (PaymentMethod::Usdt, Currency::Usdt) => true,
            _ => false,
        }
    }

    /// Returns the method to use after a currency change.
    ///
    /// Keeps the `(currency, payment_method)` pair inside the allowed set:
    /// switching to USDT while on Mercado Pago forces the USDT method;
    /// switching to ARS while on USDT forces bank transfer. A method already
    /// valid for the new currency is kept as-is.
    pub const fn corrected_for(&self, currency: Currency) -> PaymentMethod {
        match (self, currency) {
            (PaymentMethod::Mercadopago, Currency::Usdt) => PaymentMethod::Usdt,
            (PaymentMethod::Usdt, Currency::Ars) => PaymentMethod::Transfer,
            _ => *self,
        }
    }

    /// Buyer-facing label, as shown in the confirmation step and the
    /// WhatsApp message.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Transfer => "Transferencia Bancaria",
            PaymentMethod::Mercadopago => "Mercado Pago",
            PaymentMethod::Usdt => "USDT (Criptomoneda)",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Transfer
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How the order reaches the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Pickup at the store. Free.
    Pickup,
    /// Delivery to a ViaCargo branch. Fixed cost in base currency.
    Viacargo,
}

impl ShippingMethod {
    /// Shipping cost in base currency.
    pub const fn cost(&self) -> Money {
        match self {
            ShippingMethod::Pickup => Money::zero(),
            ShippingMethod::Viacargo => Money::from_cents(crate::VIACARGO_SHIPPING_CENTS),
        }
    }

    /// Whether this method needs a delivery address.
    pub const fn requires_address(&self) -> bool {
        matches!(self, ShippingMethod::Viacargo)
    }

    /// Buyer-facing label.
    pub const fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Pickup => "Retiro en Local",
            ShippingMethod::Viacargo => "Sucursal de ViaCargo",
        }
    }
}

impl Default for ShippingMethod {
    fn default() -> Self {
        ShippingMethod::Pickup
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment status of a confirmed order.
///
/// The variants name the nominal progression, but transitions are NOT
/// restricted: `update_status` may replace any status with any other. Orders
/// are managed by a human over chat, and corrections (shipped → processing)
/// do happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created, not yet acknowledged by the seller.
    Pending,
    /// Seller confirmed the order over chat.
    Confirmed,
    /// Payment received, order being prepared.
    Processing,
    /// Handed to the carrier / ready for pickup.
    Shipped,
    /// Received by the buyer.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Checkout Form Data
// =============================================================================

/// Contact data collected in the first checkout step.
///
/// Lives only for the duration of one checkout session; the confirmed order
/// carries its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// National identity document number.
    pub dni: String,
}

/// Delivery address collected in the shipping step.
///
/// Only meaningful when the shipping method requires delivery; for store
/// pickup it may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

// =============================================================================
// Exchange Rate Snapshot
// =============================================================================

/// The most recently aggregated USDT→ARS conversion rate.
///
/// Replaced wholesale on every successful poll. `max_price` is the rate used
/// for all ARS amounts shown to the buyer: converting at the highest quote
/// is the conservative choice for the seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateSnapshot {
    /// Arithmetic mean across sources, rounded to whole ARS per USDT.
    pub average_price: i64,

    /// Highest quote across sources, rounded to whole ARS per USDT.
    /// This is the display/settlement rate.
    pub max_price: i64,

    /// Name of the source that produced `max_price`.
    pub source_name: String,

    /// 24h change reported by the max-price source, 0 when absent.
    pub change24h_percent: f64,

    /// When the snapshot was produced.
    pub observed_at: DateTime<Utc>,

    /// True only for the placeholder served before the first poll completes.
    pub is_stale: bool,

    /// True when every source failed and the snapshot was synthesized from
    /// fallback data. Rates are still usable; the flag exists so a UI can
    /// choose to disclose it.
    pub degraded: bool,
}

// =============================================================================
// Rate Feed Seam
// =============================================================================

/// Read access to the current exchange rate.
///
/// Implemented by the rate provider handle; the cart display and the
/// checkout workflow depend only on this trait.
pub trait RateFeed: Send + Sync {
    /// Returns the latest snapshot. Never fails: a provider always has at
    /// least fallback data to serve.
    fn current_rate(&self) -> ExchangeRateSnapshot;
}

/// A rate feed pinned to a fixed price, for tests and offline embedding.
#[derive(Debug, Clone)]
pub struct FixedRateFeed {
    max_price: i64,
}

impl FixedRateFeed {
    pub fn new(max_price: i64) -> Self {
        FixedRateFeed { max_price }
    }
}

impl RateFeed for FixedRateFeed {
    fn current_rate(&self) -> ExchangeRateSnapshot {
        ExchangeRateSnapshot {
            average_price: self.max_price,
            max_price: self.max_price,
            source_name: "fixed".to_string(),
            change24h_percent: 0.0,
            observed_at: Utc::now(),
            is_stale: false,
            degraded: false,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A confirmed order.
///
/// Created exactly once, at order confirmation, from the live cart and
/// checkout state. `items` is an owned snapshot, not a live reference: the
/// cart is cleared the moment the order exists. Immutable except `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Business identifier, e.g. `TC483920`.
    pub order_id: String,
    pub personal_data: PersonalData,
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub currency: Currency,
    /// `max_price` captured when the buyer confirmed, in ARS per USDT.
    pub exchange_rate_at_confirmation: i64,
    /// Snapshot of the cart lines at confirmation time.
    pub items: Vec<CartItem>,
    pub subtotal_cents: i64,
    pub shipping_cost_cents: i64,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the shipping cost as Money.
    #[inline]
    pub fn shipping_cost(&self) -> Money {
        Money::from_cents(self.shipping_cost_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The allowed (currency, payment method) pairs, exhaustively.
    #[test]
    fn test_payment_currency_allowed_set() {
        assert!(PaymentMethod::Transfer.allows(Currency::Usdt));
        assert!(PaymentMethod::Transfer.allows(Currency::Ars));
        assert!(PaymentMethod::Usdt.allows(Currency::Usdt));
        assert!(PaymentMethod::Mercadopago.allows(Currency::Ars));

        assert!(!PaymentMethod::Usdt.allows(Currency::Ars));
        assert!(!PaymentMethod::Mercadopago.allows(Currency::Usdt));
    }

    #[test]
    fn test_payment_correction_repairs_invalid_pairs() {
        assert_eq!(
            PaymentMethod::Mercadopago.corrected_for(Currency::Usdt),
            PaymentMethod::Usdt
        );
        assert_eq!(
            PaymentMethod::Usdt.corrected_for(Currency::Ars),
            PaymentMethod::Transfer
        );
        // Already-valid pairs are untouched.
        assert_eq!(
            PaymentMethod::Transfer.corrected_for(Currency::Ars),
            PaymentMethod::Transfer
        );
        assert_eq!(
            PaymentMethod::Transfer.corrected_for(Currency::Usdt),
            PaymentMethod::Transfer
        );
    }

    /// corrected_for always lands inside the allowed set, from any state.
    #[test]
    fn test_payment_correction_closes_over_allowed_set() {
        let methods = [
            PaymentMethod::Transfer,
            PaymentMethod::Mercadopago,
            PaymentMethod::Usdt,
        ];
        let currencies = [Currency::Ars, Currency::Usdt];

        for method in methods {
            for currency in currencies {
                assert!(method.corrected_for(currency).allows(currency));
            }
        }
    }

    #[test]
    fn test_shipping_costs() {
        assert_eq!(ShippingMethod::Pickup.cost(), Money::zero());
        assert_eq!(ShippingMethod::Viacargo.cost(), Money::from_major(16_000));
        assert!(!ShippingMethod::Pickup.requires_address());
        assert!(ShippingMethod::Viacargo.requires_address());
    }

    #[test]
    fn test_enum_serde_wire_format() {
        assert_eq!(serde_json::to_string(&Currency::Ars).unwrap(), "\"ARS\"");
        assert_eq!(serde_json::to_string(&Currency::Usdt).unwrap(), "\"USDT\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mercadopago).unwrap(),
            "\"mercadopago\""
        );
        assert_eq!(
            serde_json::to_string(&ShippingMethod::Viacargo).unwrap(),
            "\"viacargo\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_defaults_form_a_valid_pair() {
        let currency = Currency::default();
        let method = PaymentMethod::default();
        assert!(method.allows(currency));
        assert_eq!(ShippingMethod::default(), ShippingMethod::Pickup);
    }
}
