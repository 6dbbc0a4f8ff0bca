//! # Checkout Workflow
//!
//! A strictly linear four-step state machine collecting everything needed to
//! place an order, with one validation gate and one terminal transition.
//!
//! ## Step Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   1 PersonalInfo ──► 2 Shipping ──► 3 Payment ──► 4 Confirm             │
//! │                                                                         │
//! │   Forward:  next_step()                                                 │
//! │     step 1 → 2 gated by validate_personal_data()                        │
//! │     step 2 → 3 and 3 → 4 unconditional                                  │
//! │   Backward: prev_step() / go_to_step() to any prior step, ungated       │
//! │   Terminal: confirm_order() succeeds once; the session then only        │
//! │             reports the placed order                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Changing the currency keeps the `(currency, payment_method)` pair valid
//! by auto-correcting the payment method; setting an incompatible payment
//! method directly is rejected instead.
//!
//! The confirmation is asynchronous with an artificial delay standing in for
//! a backend call. It is guarded so that a double click, a shared session or
//! a dropped-and-retried future can never mint two orders from one cart.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use tecnocore_core::pricing::{order_totals, OrderTotals};
use tecnocore_core::validation::{
    validate_personal_data, validate_shipping_address, PersonalDataErrors,
};
use tecnocore_core::{
    CartItem, CartState, CoreError, Currency, ExchangeRateSnapshot, Money, Order, OrderStatus,
    PaymentMethod, PersonalData, RateFeed, ShippingAddress, ShippingMethod,
};
use tecnocore_orders::OrderStore;

use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// Checkout Step
// =============================================================================

/// The four checkout steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    PersonalInfo,
    Shipping,
    Payment,
    Confirm,
}

impl CheckoutStep {
    /// 1-based step number, as shown in the progress header.
    pub const fn number(&self) -> u8 {
        match self {
            CheckoutStep::PersonalInfo => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirm => 4,
        }
    }

    /// Buyer-facing step title.
    pub const fn title(&self) -> &'static str {
        match self {
            CheckoutStep::PersonalInfo => "Datos Personales",
            CheckoutStep::Shipping => "Envío",
            CheckoutStep::Payment => "Pago",
            CheckoutStep::Confirm => "Confirmación",
        }
    }

    const fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::PersonalInfo => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Confirm),
            CheckoutStep::Confirm => None,
        }
    }

    const fn prev(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::PersonalInfo => None,
            CheckoutStep::Shipping => Some(CheckoutStep::PersonalInfo),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Confirm => Some(CheckoutStep::Payment),
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::PersonalInfo => write!(f, "personal-info"),
            CheckoutStep::Shipping => write!(f, "shipping"),
            CheckoutStep::Payment => write!(f, "payment"),
            CheckoutStep::Confirm => write!(f, "confirm"),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Checkout workflow configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Artificial delay of the confirmation, standing in for the backend
    /// call that does not exist yet. Zero in tests.
    pub confirm_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            confirm_delay: Duration::from_secs(2),
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Everything the confirmation step renders, recomputed on demand.
///
/// The exchange rate is captured at render time, not frozen earlier in the
/// flow; two consecutive calls may show different ARS amounts if a poll
/// landed in between.
#[derive(Debug, Clone)]
pub struct CheckoutSummary {
    pub step: CheckoutStep,
    /// Totals in base currency.
    pub totals: OrderTotals,
    /// Totals converted into the selected display currency.
    pub display_totals: OrderTotals,
    pub currency: Currency,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub rate: ExchangeRateSnapshot,
}

// =============================================================================
// In-Flight Guard
// =============================================================================

/// Clears the in-flight flag when the confirmation future ends - including
/// being dropped mid-delay because the buyer navigated away.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// =============================================================================
// Checkout Session
// =============================================================================

/// One buyer's checkout session.
///
/// Holds the form state for the duration of the flow and the injected
/// collaborators: the shared cart, the order history store and the rate
/// feed. Constructed when the buyer enters checkout, dropped when they
/// leave; nothing here survives the session except the confirmed order.
pub struct CheckoutSession {
    cart: CartState,
    orders: Arc<OrderStore>,
    rates: Arc<dyn RateFeed>,
    config: CheckoutConfig,

    step: CheckoutStep,
    personal_data: PersonalData,
    personal_data_errors: PersonalDataErrors,
    shipping_address: ShippingAddress,
    shipping_method: ShippingMethod,
    payment_method: PaymentMethod,
    currency: Currency,

    in_flight: Arc<AtomicBool>,
    completed_order_id: Option<String>,
}

impl CheckoutSession {
    /// Creates a session with the default configuration.
    pub fn new(cart: CartState, orders: Arc<OrderStore>, rates: Arc<dyn RateFeed>) -> Self {
        Self::with_config(cart, orders, rates, CheckoutConfig::default())
    }

    /// Creates a session with an explicit configuration.
    pub fn with_config(
        cart: CartState,
        orders: Arc<OrderStore>,
        rates: Arc<dyn RateFeed>,
        config: CheckoutConfig,
    ) -> Self {
        CheckoutSession {
            cart,
            orders,
            rates,
            config,
            step: CheckoutStep::PersonalInfo,
            personal_data: PersonalData::default(),
            personal_data_errors: PersonalDataErrors::default(),
            shipping_address: ShippingAddress::default(),
            shipping_method: ShippingMethod::default(),
            payment_method: PaymentMethod::default(),
            currency: Currency::default(),
            in_flight: Arc::new(AtomicBool::new(false)),
            completed_order_id: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn current_step(&self) -> CheckoutStep {
        self.step
    }

    pub fn personal_data(&self) -> &PersonalData {
        &self.personal_data
    }

    /// Per-field errors from the last failed step-1 gate, for inline display.
    pub fn personal_data_errors(&self) -> &PersonalDataErrors {
        &self.personal_data_errors
    }

    pub fn shipping_address(&self) -> &ShippingAddress {
        &self.shipping_address
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Id of the order placed by this session, once there is one. This is
    /// the terminal "order placed" state.
    pub fn completed_order_id(&self) -> Option<&str> {
        self.completed_order_id.as_deref()
    }

    /// True while a confirmation is running.
    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// True when the session became invalid: the cart emptied (e.g. from
    /// another tab) before any order was placed. The UI reacts by leaving
    /// checkout for the catalog.
    pub fn should_redirect_to_catalog(&self) -> bool {
        self.completed_order_id.is_none() && self.cart.with_cart(|c| c.is_empty())
    }

    // -------------------------------------------------------------------------
    // Form Mutations
    // -------------------------------------------------------------------------

    /// Replaces the personal data and clears stale field errors.
    pub fn set_personal_data(&mut self, data: PersonalData) {
        self.personal_data = data;
        self.personal_data_errors = PersonalDataErrors::default();
    }

    pub fn set_shipping_address(&mut self, address: ShippingAddress) {
        self.shipping_address = address;
    }

    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    /// Selects the display/settlement currency.
    ///
    /// Auto-corrects the payment method when the current one cannot settle
    /// in the new currency, keeping the pair inside the allowed set.
    pub fn set_currency(&mut self, currency: Currency) {
        let corrected = self.payment_method.corrected_for(currency);
        if corrected != self.payment_method {
            debug!(
                from = ?self.payment_method,
                to = ?corrected,
                ?currency,
                "payment method corrected for currency change"
            );
            self.payment_method = corrected;
        }
        self.currency = currency;
    }

    /// Selects the payment method.
    ///
    /// Rejects a method that cannot settle in the current currency; the UI
    /// never offers one, so the attempt is surfaced instead of silently
    /// repaired.
    pub fn set_payment_method(&mut self, method: PaymentMethod) -> CheckoutResult<()> {
        if !method.allows(self.currency) {
            return Err(CoreError::PaymentNotAllowedForCurrency {
                method,
                currency: self.currency,
            }
            .into());
        }
        self.payment_method = method;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Advances to the next step.
    ///
    /// Returns `false` without moving when already on the last step, or when
    /// leaving step 1 with invalid personal data - in which case the
    /// per-field errors are populated for inline display.
    pub fn next_step(&mut self) -> bool {
        if self.step == CheckoutStep::PersonalInfo {
            let errors = validate_personal_data(&self.personal_data);
            if !errors.is_empty() {
                debug!(failing_fields = errors.len(), "personal data gate blocked");
                self.personal_data_errors = errors;
                return false;
            }
            self.personal_data_errors = PersonalDataErrors::default();
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Steps back. Returns `false` when already on the first step.
    pub fn prev_step(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Jumps directly to a prior (or the current) step. Forward jumps are
    /// refused - the only way forward is [`CheckoutSession::next_step`] and
    /// its gate.
    pub fn go_to_step(&mut self, step: CheckoutStep) -> bool {
        if step > self.step {
            return false;
        }
        self.step = step;
        true
    }

    // -------------------------------------------------------------------------
    // Derived State
    // -------------------------------------------------------------------------

    /// Order totals in base currency, from the live cart.
    pub fn totals(&self) -> OrderTotals {
        let subtotal = self.cart.with_cart(|c| c.total_price());
        order_totals(subtotal, self.shipping_method)
    }

    /// Everything the confirmation step renders. The exchange rate is read
    /// fresh on every call.
    pub fn summary(&self) -> CheckoutSummary {
        let rate = self.rates.current_rate();
        let totals = self.totals();
        CheckoutSummary {
            step: self.step,
            totals,
            display_totals: totals.in_currency(self.currency, rate.max_price),
            currency: self.currency,
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            rate,
        }
    }

    // -------------------------------------------------------------------------
    // Confirmation
    // -------------------------------------------------------------------------

    /// Places the order.
    ///
    /// ## Sequence
    /// 1. Refuse when an order was already placed, a confirmation is in
    ///    flight, or the session is not on the confirmation step
    /// 2. Re-validate personal data; for delivery shipping, the address
    /// 3. Snapshot the cart (empty cart aborts the session)
    /// 4. Simulated backend delay
    /// 5. Build the order at the rate current *now*, persist it, clear the
    ///    cart, enter the terminal state
    ///
    /// At most one order can ever come out of a session: rapid double
    /// invocation trips the in-flight flag, and a completed session refuses
    /// further confirmations outright. Dropping the future mid-delay resets
    /// the flag so the buyer can retry.
    pub async fn confirm_order(&mut self) -> CheckoutResult<Order> {
        if let Some(order_id) = &self.completed_order_id {
            return Err(CheckoutError::AlreadyCompleted {
                order_id: order_id.clone(),
            });
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::SubmissionInFlight);
        }
        let _guard = InFlightGuard(self.in_flight.clone());

        if self.step != CheckoutStep::Confirm {
            return Err(CheckoutError::NotOnConfirmStep { current: self.step });
        }

        let errors = validate_personal_data(&self.personal_data);
        if !errors.is_empty() {
            self.personal_data_errors = errors.clone();
            return Err(CheckoutError::PersonalDataInvalid(errors));
        }

        if self.shipping_method.requires_address() {
            let missing = validate_shipping_address(&self.shipping_address);
            if !missing.is_empty() {
                return Err(CheckoutError::ShippingAddressInvalid { missing });
            }
        }

        // Freeze the lines the buyer clicked "confirm" on.
        let items = self.cart.with_cart(|c| c.items().to_vec());
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Simulated network latency; a real backend call lands here one day.
        tokio::time::sleep(self.config.confirm_delay).await;

        let order = self.build_order(items, Utc::now());
        self.orders.add_order(order.clone()).await?;
        self.cart.with_cart_mut(|c| c.clear());
        self.completed_order_id = Some(order.order_id.clone());

        info!(
            order_id = %order.order_id,
            total_cents = order.total_cents,
            currency = %order.currency,
            "order placed"
        );

        Ok(order)
    }

    fn build_order(&self, items: Vec<CartItem>, now: DateTime<Utc>) -> Order {
        let subtotal: i64 = items.iter().map(|i| i.line_total_cents()).sum();
        let totals = order_totals(Money::from_cents(subtotal), self.shipping_method);
        let rate = self.rates.current_rate();

        Order {
            order_id: generate_order_id(now),
            personal_data: self.personal_data.clone(),
            shipping_address: self.shipping_address.clone(),
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            currency: self.currency,
            exchange_rate_at_confirmation: rate.max_price,
            items,
            subtotal_cents: totals.subtotal.cents(),
            shipping_cost_cents: totals.shipping_cost.cents(),
            total_cents: totals.total.cents(),
            created_at: now,
            status: OrderStatus::Pending,
        }
    }
}

// =============================================================================
// Order Id Generation
// =============================================================================

/// `TC` plus the last six digits of the unix-millisecond clock.
///
/// Unique enough for a single-seller storefront placing orders seconds
/// apart; the format matches the ids buyers already quote over chat.
fn generate_order_id(now: DateTime<Utc>) -> String {
    format!("TC{:06}", now.timestamp_millis().rem_euclid(1_000_000))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tecnocore_core::FixedRateFeed;
    use tecnocore_orders::MemoryStorage;

    fn valid_personal_data() -> PersonalData {
        PersonalData {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+54 11 5555-0000".to_string(),
            dni: "30123456".to_string(),
        }
    }

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            street: "Av. Corrientes".to_string(),
            number: "1234".to_string(),
            city: "CABA".to_string(),
            province: "Buenos Aires".to_string(),
            postal_code: "C1043".to_string(),
            ..Default::default()
        }
    }

    fn cart_with_items() -> CartState {
        let cart = CartState::new();
        cart.with_cart_mut(|c| {
            c.add_item(CartItem::new("p1", "Placa de Video", Money::from_major(500)).with_quantity(2))
        });
        cart
    }

    async fn session_with(cart: CartState, rate: i64) -> (Arc<OrderStore>, CheckoutSession) {
        let orders = Arc::new(OrderStore::open(Arc::new(MemoryStorage::new())).await);
        let session = CheckoutSession::with_config(
            cart,
            orders.clone(),
            Arc::new(FixedRateFeed::new(rate)),
            CheckoutConfig {
                confirm_delay: Duration::ZERO,
            },
        );
        (orders, session)
    }

    fn walk_to_confirm(session: &mut CheckoutSession) {
        session.set_personal_data(valid_personal_data());
        assert!(session.next_step());
        assert!(session.next_step());
        assert!(session.next_step());
        assert_eq!(session.current_step(), CheckoutStep::Confirm);
    }

    #[tokio::test]
    async fn test_step_one_gate_blocks_invalid_data() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;

        let mut data = valid_personal_data();
        data.email = "not-an-email".to_string();
        session.set_personal_data(data);

        assert!(!session.next_step());
        assert_eq!(session.current_step(), CheckoutStep::PersonalInfo);
        assert!(session.personal_data_errors().email.is_some());
        assert!(session.personal_data_errors().first_name.is_none());
    }

    #[tokio::test]
    async fn test_forward_walk_and_backward_navigation() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;
        walk_to_confirm(&mut session);

        // No step past Confirm.
        assert!(!session.next_step());

        // Backward to any prior step, but never forward via go_to_step.
        assert!(session.go_to_step(CheckoutStep::PersonalInfo));
        assert!(!session.go_to_step(CheckoutStep::Payment));
        assert_eq!(session.current_step(), CheckoutStep::PersonalInfo);
        assert!(!session.prev_step());
    }

    #[tokio::test]
    async fn test_currency_payment_pair_stays_valid() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;

        let assert_valid = |s: &CheckoutSession| {
            assert!(
                s.payment_method().allows(s.currency()),
                "invalid pair: {:?}/{:?}",
                s.currency(),
                s.payment_method()
            );
        };

        assert_valid(&session); // (Usdt, Transfer)

        session.set_payment_method(PaymentMethod::Usdt).unwrap();
        assert_valid(&session);

        session.set_currency(Currency::Ars); // forces Transfer
        assert_valid(&session);
        assert_eq!(session.payment_method(), PaymentMethod::Transfer);

        session.set_payment_method(PaymentMethod::Mercadopago).unwrap();
        session.set_currency(Currency::Usdt); // forces Usdt method
        assert_valid(&session);
        assert_eq!(session.payment_method(), PaymentMethod::Usdt);

        // Incompatible direct selection is rejected and changes nothing.
        let err = session.set_payment_method(PaymentMethod::Mercadopago);
        assert!(err.is_err());
        assert_valid(&session);
        assert_eq!(session.payment_method(), PaymentMethod::Usdt);
    }

    #[tokio::test]
    async fn test_confirm_builds_and_persists_order() {
        let (orders, mut session) = session_with(cart_with_items(), 1300).await;
        walk_to_confirm(&mut session);

        let order = session.confirm_order().await.unwrap();

        assert!(order.order_id.starts_with("TC"));
        assert_eq!(order.order_id.len(), 8);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal_cents, Money::from_major(1000).cents());
        assert_eq!(order.shipping_cost_cents, 0);
        assert_eq!(order.total_cents, Money::from_major(1000).cents());
        assert_eq!(order.exchange_rate_at_confirmation, 1300);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);

        // Persisted once, cart cleared, session terminal.
        assert_eq!(orders.len().await, 1);
        assert!(session.cart.with_cart(|c| c.is_empty()));
        assert_eq!(session.completed_order_id(), Some(order.order_id.as_str()));
    }

    #[tokio::test]
    async fn test_viacargo_ars_display_totals() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;
        session.set_shipping_method(ShippingMethod::Viacargo);
        session.set_shipping_address(valid_address());
        session.set_currency(Currency::Ars);
        walk_to_confirm(&mut session);

        let summary = session.summary();
        assert_eq!(summary.totals.total, Money::from_major(17_000));
        assert_eq!(
            summary.display_totals.shipping_cost,
            Money::from_major(16_000 * 1300)
        );
        assert_eq!(summary.display_totals.total, Money::from_major(22_100_000));

        let order = session.confirm_order().await.unwrap();
        assert_eq!(order.total_cents, Money::from_major(17_000).cents());
        assert_eq!(order.currency, Currency::Ars);
    }

    /// Confirming twice in rapid succession creates exactly one order.
    #[tokio::test]
    async fn test_double_confirm_creates_one_order() {
        let (orders, mut session) = session_with(cart_with_items(), 1300).await;
        walk_to_confirm(&mut session);

        let first = session.confirm_order().await;
        assert!(first.is_ok());

        let second = session.confirm_order().await;
        assert!(matches!(second, Err(CheckoutError::AlreadyCompleted { .. })));
        assert_eq!(orders.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_confirmation_can_be_retried() {
        let cart = cart_with_items();
        let orders = Arc::new(OrderStore::open(Arc::new(MemoryStorage::new())).await);
        let mut session = CheckoutSession::with_config(
            cart,
            orders.clone(),
            Arc::new(FixedRateFeed::new(1300)),
            CheckoutConfig {
                confirm_delay: Duration::from_secs(2),
            },
        );
        walk_to_confirm(&mut session);

        // Buyer navigates away mid-submit: the future is dropped during the
        // delay and the in-flight flag must come back down.
        let cancelled =
            tokio::time::timeout(Duration::from_millis(10), session.confirm_order()).await;
        assert!(cancelled.is_err());
        assert!(!session.is_processing());
        assert_eq!(orders.len().await, 0);

        let retried = session.confirm_order().await.unwrap();
        assert_eq!(orders.len().await, 1);
        assert_eq!(session.completed_order_id(), Some(retried.order_id.as_str()));
    }

    #[tokio::test]
    async fn test_confirm_from_wrong_step_refused() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;
        session.set_personal_data(valid_personal_data());

        let err = session.confirm_order().await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::NotOnConfirmStep {
                current: CheckoutStep::PersonalInfo
            }
        ));
        assert!(!session.is_processing());
    }

    #[tokio::test]
    async fn test_empty_cart_aborts_session() {
        let (orders, mut session) = session_with(CartState::new(), 1300).await;
        assert!(session.should_redirect_to_catalog());

        walk_to_confirm(&mut session);
        let err = session.confirm_order().await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(orders.len().await, 0);

        // After a successful order the empty cart is expected, not invalid.
        let (_, mut completed) = session_with(cart_with_items(), 1300).await;
        walk_to_confirm(&mut completed);
        completed.confirm_order().await.unwrap();
        assert!(!completed.should_redirect_to_catalog());
    }

    #[tokio::test]
    async fn test_viacargo_without_address_refused() {
        let (_, mut session) = session_with(cart_with_items(), 1300).await;
        session.set_shipping_method(ShippingMethod::Viacargo);
        walk_to_confirm(&mut session);

        let err = session.confirm_order().await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::ShippingAddressInvalid { .. }
        ));

        // Pickup never needs an address.
        session.set_shipping_method(ShippingMethod::Pickup);
        assert!(session.confirm_order().await.is_ok());
    }

    #[test]
    fn test_order_id_format() {
        let now = DateTime::from_timestamp_millis(1_722_470_483_920).unwrap();
        let id = generate_order_id(now);
        assert_eq!(id, "TC483920");
    }
}
