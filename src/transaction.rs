//! Turns form answers into a YNAB transaction and posts it.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::api::models::{
    ClearedStatus, DataEnvelope, FlagColor, SaveTransaction, SaveTransactionWrapper,
    SavedTransactionData,
};
use crate::api::YnabClient;
use crate::cli::forms::FormAnswers;
use crate::errors::AppError;
use crate::reference::budget_path;

/// YNAB stores amounts as integer thousandths of the major unit.
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// Sentinel flag choice that is sent as `null`.
pub const NO_FLAG: &str = "none";

/// Answers collected for one transaction, before conversion to the wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: Decimal,
    pub account_id: String,
    pub payee_id: String,
    pub category_id: String,
    pub memo: String,
    pub flag_color: Option<FlagColor>,
    pub cleared: ClearedStatus,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn from_answers(answers: &FormAnswers, date: NaiveDate) -> Result<Self, AppError> {
        let amount = parse_amount(require(answers, "amount")?)?;

        let flag = answers.get("flag_color").unwrap_or(NO_FLAG);
        let flag_color = if flag.eq_ignore_ascii_case(NO_FLAG) {
            None
        } else {
            Some(
                FlagColor::from_name(flag).ok_or_else(|| AppError::UnknownValue {
                    field: "flag_color",
                    value: flag.to_string(),
                })?,
            )
        };

        let cleared_raw = answers.get("cleared").unwrap_or("uncleared");
        let cleared =
            ClearedStatus::from_name(cleared_raw).ok_or_else(|| AppError::UnknownValue {
                field: "cleared",
                value: cleared_raw.to_string(),
            })?;

        Ok(Self {
            amount,
            account_id: require(answers, "account")?.to_string(),
            payee_id: require(answers, "payee")?.to_string(),
            category_id: require(answers, "category")?.to_string(),
            memo: answers.get("memo").unwrap_or_default().to_string(),
            flag_color,
            cleared,
            date,
        })
    }

    pub fn milliunits(&self) -> Result<i64, AppError> {
        to_milliunits(self.amount).ok_or_else(|| AppError::InvalidAmount(self.amount.to_string()))
    }

    /// Request body for `POST budgets/{id}/transactions`.
    pub fn to_payload(&self) -> Result<SaveTransactionWrapper, AppError> {
        Ok(SaveTransactionWrapper {
            transaction: SaveTransaction {
                account_id: self.account_id.clone(),
                payee_id: self.payee_id.clone(),
                category_id: self.category_id.clone(),
                amount: self.milliunits()?,
                memo: self.memo.clone(),
                flag_color: self.flag_color,
                cleared: self.cleared,
                date: self.date,
                approved: true,
            },
        })
    }
}

fn require<'a>(answers: &'a FormAnswers, id: &'static str) -> Result<&'a str, AppError> {
    answers.get(id).ok_or(AppError::MissingAnswer(id))
}

pub fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw.trim()).map_err(|_| AppError::InvalidAmount(raw.to_string()))
}

/// `amount × 1000`, rounded half away from zero; `None` on overflow.
pub fn to_milliunits(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::from(MILLIUNITS_PER_UNIT))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// How a submission ended. Both variants are terminal for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { transaction_id: Option<String> },
    Rejected { detail: String },
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }
}

/// Posts the transaction. Failures are reported through the outcome rather
/// than returned as errors.
pub fn submit(
    client: &YnabClient,
    budget_id: &str,
    payload: &SaveTransactionWrapper,
) -> SubmitOutcome {
    match client.post(&budget_path(budget_id, "transactions"), payload) {
        Ok(reply) => {
            let transaction_id =
                serde_json::from_value::<DataEnvelope<SavedTransactionData>>(reply)
                    .ok()
                    .and_then(|envelope| envelope.data.transaction)
                    .map(|saved| saved.id);
            tracing::info!(
                transaction_id = transaction_id.as_deref().unwrap_or("unknown"),
                "transaction created"
            );
            SubmitOutcome::Created { transaction_id }
        }
        Err(err) => {
            let detail = err
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            SubmitOutcome::Rejected { detail }
        }
    }
}
