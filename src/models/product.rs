use serde::{Deserialize, Serialize};

/// One inventory product record, served verbatim from the bundled fixture.
/// Opaque for the same reason as [`crate::models::Customer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(pub serde_json::Value);
