//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber. The level
//! filter comes from `RUST_LOG`; the output format comes from `log.format` in
//! [`KitchenConfig`](crate::lifecycle::KitchenConfig).
//!
//! - `compact`: one short line per event with spans inline and no module
//!   paths. Every actor event carries `entity_type`, so the target adds nothing.
//! - `json`: one JSON object per event, for log shippers.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown of each table, with its final size
//! - **Table operations**: Create, Get, FindUnique, List, Update, Delete, Action
//! - **Placement**: client resolution, unavailable items, the priced total
//! - **Errors**: rejected placements at `warn`, storage failures at `error`
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                          # request payloads
//! RUST_LOG=kitchen_orders::framework=debug cargo run
//! KITCHEN__LOG__FORMAT=json RUST_LOG=info cargo run
//! ```
//!
//! **With `RUST_LOG=info`** (compact), placing one order looks like:
//!
//! ```text
//! INFO place_order: Order priced id=order_1 client_id=client_1 total=25.00
//! INFO place_order: Created entity_type="Order" id=order_1 size=1
//! INFO place_order: Order placed order_id=order_1 total=25.00
//! ```
//!
//! Passcodes never appear in logs: client references redact them and the
//! methods that take one skip it in their span.

use crate::lifecycle::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .init(),
    }
}
