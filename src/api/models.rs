//! Response and request bodies for the endpoints the command uses. Only the
//! fields the command reads are modelled; everything else is ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard `{ "data": ... }` wrapper around every successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsData {
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub on_budget: bool,
    pub closed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayeesData {
    pub payees: Vec<Payee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Payee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesData {
    pub category_groups: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_group_name: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl FlagColor {
    pub const ALL: [FlagColor; 6] = [
        FlagColor::Red,
        FlagColor::Orange,
        FlagColor::Yellow,
        FlagColor::Green,
        FlagColor::Blue,
        FlagColor::Purple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlagColor::Red => "red",
            FlagColor::Orange => "orange",
            FlagColor::Yellow => "yellow",
            FlagColor::Green => "green",
            FlagColor::Blue => "blue",
            FlagColor::Purple => "purple",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    Cleared,
    Uncleared,
}

impl ClearedStatus {
    pub const ALL: [ClearedStatus; 2] = [ClearedStatus::Cleared, ClearedStatus::Uncleared];

    pub fn as_str(self) -> &'static str {
        match self {
            ClearedStatus::Cleared => "cleared",
            ClearedStatus::Uncleared => "uncleared",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

/// Body of `POST budgets/{id}/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveTransactionWrapper {
    pub transaction: SaveTransaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveTransaction {
    pub account_id: String,
    pub payee_id: String,
    pub category_id: String,
    /// Milliunits: 1/1000 of the currency's major unit.
    pub amount: i64,
    pub memo: String,
    pub flag_color: Option<FlagColor>,
    pub cleared: ClearedStatus,
    pub date: NaiveDate,
    pub approved: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedTransactionData {
    #[serde(default)]
    pub transaction: Option<SavedTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedTransaction {
    pub id: String,
}
