//! # WhatsApp Handoff
//!
//! There is no order-management backend: once an order is placed, the sale
//! is completed by a human over WhatsApp. This module renders the pre-filled
//! message a buyer sends to the store chat and the deep link that opens it.
//!
//! One-way and fire-and-forget - nothing here waits for a response.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use tecnocore_core::Order;

/// Invite link of the store's order-coordination chat.
pub const WHATSAPP_CHAT_URL: &str = "https://chat.whatsapp.com/LV1Ne3sBX7YEkRBGVtTf9y";

// =============================================================================
// Message Template
// =============================================================================

/// Renders the buyer's post-confirmation message.
///
/// Itemized lines, total, shipping and payment labels. Amounts are in base
/// currency, matching what the confirmation step displayed as the primary
/// figure.
pub fn order_message(order: &Order) -> String {
    let mut lines = String::new();
    for item in &order.items {
        lines.push_str(&format!(
            "• {} ({}x) - {}\n",
            item.name,
            item.quantity,
            item.line_total()
        ));
    }

    format!(
        "¡Hola! Mi pedido #{order_id} fue confirmado exitosamente.\n\
         \n\
         📦 *Detalles del Pedido:*\n\
         {lines}\
         \n\
         💰 *Total:* {total}\n\
         🚚 *Envío:* {shipping}\n\
         💳 *Pago:* {payment}\n\
         \n\
         ¿Podrían confirmarme los próximos pasos? ¡Gracias!",
        order_id = order.order_id,
        lines = lines,
        total = order.total(),
        shipping = order.shipping_method.label(),
        payment = order.payment_method.label(),
    )
}

/// Builds the deep link opening the store chat with the message pre-filled.
pub fn whatsapp_url(order: &Order) -> String {
    let message = order_message(order);
    format!(
        "{}?text={}",
        WHATSAPP_CHAT_URL,
        utf8_percent_encode(&message, NON_ALPHANUMERIC)
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
