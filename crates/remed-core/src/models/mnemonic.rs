use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A memory aid and what each letter stands for.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Mnemonic {
    pub id: String,
    pub mnemonic: String,
    pub stands_for: String,
    pub topic: String,
    pub category: String,
}
