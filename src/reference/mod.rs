//! Reference data (accounts, payees, categories) fetched once per run and
//! flattened into [`Lookup`]s for the selection prompts.

pub mod lookup;

pub use lookup::Lookup;

use crate::api::models::{
    Account, AccountsData, CategoriesData, CategoryGroup, DataEnvelope, Payee, PayeesData,
};
use crate::api::{ApiError, YnabClient};

/// Category groups YNAB manages itself; their categories cannot take spending.
pub const EXCLUDED_CATEGORY_GROUPS: [&str; 2] =
    ["Credit Card Payments", "Internal Master Category"];

/// The three lookups the transaction form selects from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub accounts: Lookup,
    pub payees: Lookup,
    pub categories: Lookup,
}

impl ReferenceData {
    pub fn load(client: &YnabClient, budget_id: &str) -> Result<Self, ApiError> {
        let accounts = load_accounts(client, budget_id)?;
        let payees = load_payees(client, budget_id)?;
        let categories = load_categories(client, budget_id)?;
        tracing::info!(
            accounts = accounts.len(),
            payees = payees.len(),
            categories = categories.len(),
            "reference data loaded"
        );
        Ok(Self {
            accounts,
            payees,
            categories,
        })
    }

    /// One-line count of what was loaded, shown before the form starts.
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} accounts, {} payees and {} categories",
            self.accounts.len(),
            self.payees.len(),
            self.categories.len()
        )
    }
}

pub fn budget_path(budget_id: &str, resource: &str) -> String {
    format!("budgets/{budget_id}/{resource}")
}

pub fn load_accounts(client: &YnabClient, budget_id: &str) -> Result<Lookup, ApiError> {
    let envelope: DataEnvelope<AccountsData> = client.get(&budget_path(budget_id, "accounts"))?;
    Ok(accounts_lookup(&envelope.data.accounts))
}

pub fn load_payees(client: &YnabClient, budget_id: &str) -> Result<Lookup, ApiError> {
    let envelope: DataEnvelope<PayeesData> = client.get(&budget_path(budget_id, "payees"))?;
    Ok(payees_lookup(&envelope.data.payees))
}

pub fn load_categories(client: &YnabClient, budget_id: &str) -> Result<Lookup, ApiError> {
    let envelope: DataEnvelope<CategoriesData> =
        client.get(&budget_path(budget_id, "categories"))?;
    Ok(categories_lookup(&envelope.data.category_groups))
}

/// Open, on-budget accounts keyed by ID.
pub fn accounts_lookup(accounts: &[Account]) -> Lookup {
    accounts
        .iter()
        .filter(|account| account.on_budget && !account.closed)
        .map(|account| (account.id.as_str(), account.name.as_str()))
        .collect()
}

pub fn payees_lookup(payees: &[Payee]) -> Lookup {
    payees
        .iter()
        .filter(|payee| !payee.deleted)
        .map(|payee| (payee.id.as_str(), payee.name.as_str()))
        .collect()
}

/// Visible categories labelled `"{group}: {name}"`, in group order.
pub fn categories_lookup(groups: &[CategoryGroup]) -> Lookup {
    groups
        .iter()
        .filter(|group| !group.hidden && !group.deleted)
        .flat_map(|group| {
            group.categories.iter().map(move |category| {
                let group_name = category
                    .category_group_name
                    .as_deref()
                    .unwrap_or(&group.name);
                (category, group_name)
            })
        })
        .filter(|(category, group_name)| {
            !category.hidden
                && !category.deleted
                && !EXCLUDED_CATEGORY_GROUPS.contains(group_name)
        })
        .map(|(category, group_name)| {
            (
                category.id.clone(),
                format!("{}: {}", group_name, category.name),
            )
        })
        .collect()
}
