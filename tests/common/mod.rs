#![allow(dead_code)]

use chrono::NaiveDate;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use ynab_transaction::config::Config;

pub const BUDGET_ID: &str = "b1";
pub const TOKEN: &str = "test-token";

/// Scripted answers that pick Checking / Grocer / Bills: Rent for 10.00.
pub const HAPPY_PATH_INPUTS: &str =
    "10|Checking|gro|Grocer|rent|Bills: Rent|<BLANK>|none|uncleared";

pub fn config_for(server: &ServerGuard) -> Config {
    Config {
        token: TOKEN.to_string(),
        budget_id: BUDGET_ID.to_string(),
        base_url: server.url(),
    }
}

pub fn accounts_body() -> Value {
    json!({
        "data": {
            "accounts": [
                {"id": "a1", "name": "Checking", "on_budget": true, "closed": false},
                {"id": "a2", "name": "Old Card", "on_budget": true, "closed": true},
                {"id": "a3", "name": "Brokerage", "on_budget": false, "closed": false}
            ],
            "server_knowledge": 10
        }
    })
}

pub fn payees_body() -> Value {
    json!({
        "data": {
            "payees": [
                {"id": "p1", "name": "Grocer", "deleted": false},
                {"id": "p2", "name": "Old Grocer", "deleted": true},
                {"id": "p3", "name": "Landlord", "deleted": false}
            ]
        }
    })
}

pub fn categories_body() -> Value {
    json!({
        "data": {
            "category_groups": [
                {
                    "id": "g0", "name": "Internal Master Category", "hidden": false, "deleted": false,
                    "categories": [
                        {"id": "c0", "name": "Inflow: Ready to Assign", "category_group_name": "Internal Master Category", "hidden": false, "deleted": false}
                    ]
                },
                {
                    "id": "g1", "name": "Bills", "hidden": false, "deleted": false,
                    "categories": [
                        {"id": "c1", "name": "Rent", "category_group_name": "Bills", "hidden": false, "deleted": false},
                        {"id": "c2", "name": "Old Rent", "category_group_name": "Bills", "hidden": true, "deleted": false}
                    ]
                },
                {
                    "id": "g2", "name": "Credit Card Payments", "hidden": false, "deleted": false,
                    "categories": [
                        {"id": "c3", "name": "Visa", "category_group_name": "Credit Card Payments", "hidden": false, "deleted": false}
                    ]
                }
            ]
        }
    })
}

fn json_mock(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &Value,
) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// Mounts the three reference endpoints with the fixtures above.
pub fn mock_reference_data(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        json_mock(server, "GET", "/budgets/b1/accounts", 200, &accounts_body()),
        json_mock(server, "GET", "/budgets/b1/payees", 200, &payees_body()),
        json_mock(server, "GET", "/budgets/b1/categories", 200, &categories_body()),
    ]
}

/// Body the happy-path answers must produce.
pub fn expected_payload(date: NaiveDate) -> Value {
    json!({
        "transaction": {
            "account_id": "a1",
            "payee_id": "p1",
            "category_id": "c1",
            "amount": 10000,
            "memo": "",
            "flag_color": null,
            "cleared": "uncleared",
            "date": date.format("%Y-%m-%d").to_string(),
            "approved": true
        }
    })
}

/// Accepts exactly `payload` and answers 201.
pub fn mock_transaction_created(server: &mut ServerGuard, payload: Value) -> Mock {
    server
        .mock("POST", "/budgets/b1/transactions")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_body(Matcher::Json(payload))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"data": {"transaction_ids": ["t1"], "transaction": {"id": "t1"}}}).to_string(),
        )
        .create()
}

pub fn mock_transaction_rejected(server: &mut ServerGuard, detail: &str) -> Mock {
    json_mock(
        server,
        "POST",
        "/budgets/b1/transactions",
        401,
        &json!({"error": {"id": "401", "name": "unauthorized", "detail": detail}}),
    )
}
