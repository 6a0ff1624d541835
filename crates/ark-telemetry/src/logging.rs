//! Structured logging helpers.
//!
//! Every event carries the same leading fields so that log shippers can
//! index them:
//! - `component`: emitting component (bootstrap, broadcast, netcheck, ...)
//! - `peer`: remote peer as `host:port`, for peer-scoped events
//! - `network`: network variant, for network-scoped events

/// Log a component-scoped event.
///
/// # Example
///
/// ```rust
/// ark_telemetry::log_event!(info, "netcheck", "settings printed", json = false);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a peer-related event with standard fields.
///
/// # Example
///
/// ```rust
/// let peer = "167.114.29.49:4002";
/// ark_telemetry::log_peer_event!(warn, "broadcast", "submission failed", peer, attempt = 2);
/// ```
#[macro_export]
macro_rules! log_peer_event {
    ($level:ident, $component:expr, $msg:expr, $peer:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            peer = %$peer,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a network-related event with standard fields.
#[macro_export]
macro_rules! log_network_event {
    ($level:ident, $component:expr, $msg:expr, $network:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            network = %$network,
            $($($field)*,)?
            $msg
        )
    };
}
