use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ExpenseId = Uuid;

/// Chat user that owns a sequence of expenses.
pub type UserId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Food
    Fd,
    /// Drinks
    Drnk,
    /// Everything else
    Els,
    /// Medicine
    Med,
    Dope,
    /// Transport
    Trns,
    /// Home
    Hom,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fd,
        Category::Drnk,
        Category::Els,
        Category::Med,
        Category::Dope,
        Category::Trns,
        Category::Hom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fd => "fd",
            Category::Drnk => "drnk",
            Category::Els => "els",
            Category::Med => "med",
            Category::Dope => "dope",
            Category::Trns => "trns",
            Category::Hom => "hom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fd" => Some(Category::Fd),
            "drnk" => Some(Category::Drnk),
            "els" => Some(Category::Els),
            "med" => Some(Category::Med),
            "dope" => Some(Category::Dope),
            "trns" => Some(Category::Trns),
            "hom" => Some(Category::Hom),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Malaysian ringgit
    Myr,
    /// Thai baht
    Thb,
    /// Vietnamese dong
    Vnd,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Myr, Currency::Thb, Currency::Vnd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Myr => "myr",
            Currency::Thb => "thb",
            Currency::Vnd => "vnd",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "myr" => Some(Currency::Myr),
            "thb" => Some(Currency::Thb),
            "vnd" => Some(Currency::Vnd),
            _ => None,
        }
    }

    /// Fixed conversion factor into USD, the reporting unit.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Myr => 0.21,
            Currency::Thb => 0.027,
            Currency::Vnd => 0.000043,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_valid_category(s: &str) -> bool {
    Category::from_str(s).is_some()
}

pub fn is_valid_currency(s: &str) -> bool {
    Currency::from_str(s).is_some()
}

/// A single logged expense. Records are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    /// Amount in the original currency
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
    /// When the expense was recorded
    pub timestamp: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn new(
        amount: f64,
        currency: Currency,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            currency,
            category,
            timestamp,
        }
    }

    /// Amount converted into USD with the fixed rate table.
    pub fn usd_amount(&self) -> f64 {
        self.amount * self.currency.rate()
    }
}
