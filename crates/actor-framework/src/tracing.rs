//! # Observability
//!
//! [`setup_tracing`] installs the `tracing` subscriber used by binaries built on the
//! framework. Every actor logs its lifecycle and each request with structured fields
//! (`entity_type`, `id`, `size`), so a single filter shows the whole request flow:
//!
//! ```bash
//! RUST_LOG=info cargo run     # Created / Updated / Deleted lines
//! RUST_LOG=debug cargo run    # payloads of every request
//! ```
//!
//! With `RUST_LOG=info` a category reorder reads:
//!
//! ```text
//! INFO Updated entity_type="Category" id=category_2
//! INFO Updated entity_type="Category" id=category_1
//! INFO Updated entity_type="Category" id=category_3
//! ```

/// Initializes the global subscriber: `RUST_LOG` filtering, compact lines, no targets.
///
/// Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already names the source
        .compact()
        .init();
}
