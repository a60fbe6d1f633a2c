use serde::{Deserialize, Serialize};
use serde_json::Value;

use invoicegen_core::non_empty_str;

/// A billed or delivery party on an invoice.
///
/// Clients send either a bare label (`"Acme Traders"`) or a record with a
/// name and optional details (`{"name": "Acme Traders", "phone": "98450..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contact {
    Label(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
}

impl Contact {
    /// Read a contact from a raw JSON value.
    ///
    /// Returns `None` for anything that is neither a non-empty string nor an
    /// object with a non-empty string `name`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => non_empty_str(value).map(|s| Self::Label(s.to_string())),
            Value::Object(map) => {
                let name = map.get("name").and_then(non_empty_str)?;
                Some(Self::Detailed {
                    name: name.to_string(),
                    phone: map.get("phone").and_then(optional_text),
                    address: map.get("address").and_then(optional_text),
                })
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Label(name) | Self::Detailed { name, .. } => name,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::Label(_) => None,
            Self::Detailed { phone, .. } => phone.as_deref(),
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Label(_) => None,
            Self::Detailed { address, .. } => address.as_deref(),
        }
    }
}

// Phone numbers are often typed as numbers by form clients.
fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
