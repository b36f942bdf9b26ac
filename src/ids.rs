//! Identifier and timestamp helpers shared across pipeline stages.

use chrono::Utc;

/// Derive a stable identifier from a display name: lowercase, spaces
/// replaced with underscores.
///
/// Distinct display names can collide ("Ops Team" vs "ops team"); callers
/// accept that rather than allocating unique suffixes.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Timestamp-suffixed identifier, e.g. `workflow_plan_20250828_101500`.
pub fn timestamp_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().format("%Y%m%d_%H%M%S"))
}

/// RFC 3339 timestamp for `created_at` / `updated_at` style fields.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
