use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level grouping of a ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountCategory {
    Revenue,
    Expense,
    Assets,
    Liability,
    /// Any other tag. Kept verbatim, never matched by the calculations.
    Other(String),
}

impl AccountCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Assets => "assets",
            Self::Liability => "liability",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for AccountCategory {
    fn from(tag: &str) -> Self {
        match tag {
            "revenue" => Self::Revenue,
            "expense" => Self::Expense,
            "assets" => Self::Assets,
            "liability" => Self::Liability,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountCategory {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<AccountCategory> for String {
    fn from(category: AccountCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debit/credit polarity of a ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    Debit,
    Credit,
    Other(String),
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ValueType {
    fn from(tag: &str) -> Self {
        match tag {
            "debit" => Self::Debit,
            "credit" => Self::Credit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ValueType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accounting line as supplied by the loader.
///
/// Every field is optional. Decoding never fails: a field that is absent or
/// carries the wrong JSON type is left as `None`, and a `None` field matches no
/// filter. A missing `total_value` contributes 0 to any sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct LedgerEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_category: Option<AccountCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
}

impl LedgerEntry {
    pub fn new(
        account_category: AccountCategory,
        account_type: impl Into<String>,
        value_type: ValueType,
        total_value: f64,
    ) -> Self {
        Self {
            account_category: Some(account_category),
            account_type: Some(account_type.into()),
            value_type: Some(value_type),
            total_value: Some(total_value),
        }
    }

    pub fn with_category(mut self, category: AccountCategory) -> Self {
        self.account_category = Some(category);
        self
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    pub fn with_total(mut self, total_value: f64) -> Self {
        self.total_value = Some(total_value);
        self
    }

    pub fn is_category(&self, category: &AccountCategory) -> bool {
        self.account_category.as_ref() == Some(category)
    }

    pub fn is_value_type(&self, value_type: &ValueType) -> bool {
        self.value_type.as_ref() == Some(value_type)
    }

    pub fn has_account_type(&self, account_type: &str) -> bool {
        self.account_type.as_deref() == Some(account_type)
    }

    pub fn has_account_type_in(&self, account_types: &[&str]) -> bool {
        self.account_type
            .as_deref()
            .is_some_and(|current| account_types.contains(&current))
    }

    /// Monetary magnitude, 0 when the entry carries none.
    pub fn amount(&self) -> f64 {
        self.total_value.unwrap_or(0.0)
    }
}

fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

impl From<Value> for LedgerEntry {
    fn from(value: Value) -> Self {
        Self {
            account_category: text_field(&value, "account_category").map(AccountCategory::from),
            account_type: text_field(&value, "account_type").map(str::to_owned),
            value_type: text_field(&value, "value_type").map(ValueType::from),
            total_value: value.get("total_value").and_then(Value::as_f64),
        }
    }
}
