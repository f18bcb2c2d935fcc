use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// One entry of the catalog as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// Signature body. May span several lines.
    pub text: String,
    pub tier: Tier,
}

impl SignatureRecord {
    pub fn new(text: impl Into<String>, tier: Tier) -> Self {
        Self {
            text: text.into(),
            tier,
        }
    }
}

/// Wire shape of a drawn signature: `{"signature": ..., "tier": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDraw {
    pub signature: String,
    pub tier: Tier,
}

impl From<&SignatureRecord> for SignatureDraw {
    fn from(record: &SignatureRecord) -> Self {
        Self {
            signature: record.text.clone(),
            tier: record.tier,
        }
    }
}
