use serde::{Deserialize, Serialize};

/// One CRM customer record, served verbatim from the bundled fixture.
/// The service never interprets individual fields; whatever shape the
/// fixture defines round-trips through parse and response unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub serde_json::Value);
