//! # Ark-Net Test Suite
//!
//! End-to-end flows that cross crate-internal boundaries:
//!
//! ```text
//! tests/src/
//! ├── support.rs        # FakeArkNode: a local axum server speaking Ark v1
//! └── integration/
//!     ├── http_flows.rs      # Real HttpPeerTransport against FakeArkNode
//!     ├── client_flows.rs    # ArkClient over the mock transport
//!     └── switch_flows.rs    # Network switching under concurrent readers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ark-tests
//! cargo bench -p ark-tests
//! ```

pub mod support;
