//! Gold balances and regional currency exchange.
//!
//! Balances are held in gold on the character. Regional currencies only
//! exist for display and exchange; [`CurrencyTable`] converts between
//! them using rates relative to gold.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};

/// Credits and debits a character's currency balance.
pub trait CurrencyLedger {
    /// Current balance.
    fn balance(&self, character: &Character) -> u64;

    /// Add `amount` to the balance.
    fn credit(&self, character: &mut Character, amount: u64);

    /// Remove `amount` from the balance. Fails without changes if the
    /// balance is too small.
    fn debit(&self, character: &mut Character, amount: u64) -> CoreResult<()>;
}

/// Ledger over the character's gold purse.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldLedger;

impl CurrencyLedger for GoldLedger {
    fn balance(&self, character: &Character) -> u64 {
        character.gold
    }

    fn credit(&self, character: &mut Character, amount: u64) {
        character.gold = character.gold.saturating_add(amount);
    }

    fn debit(&self, character: &mut Character, amount: u64) -> CoreResult<()> {
        if character.gold < amount {
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: character.gold,
            });
        }
        character.gold -= amount;
        Ok(())
    }
}

/// A currency with an exchange rate relative to gold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Display name (e.g. `Silver`).
    pub name: String,
    /// Short symbol (e.g. `S`).
    pub symbol: String,
    /// Value of one unit in gold.
    pub rate: f64,
}

impl Currency {
    /// Create a currency.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// Convert `amount` of this currency into `target`, rounded to two decimals.
    pub fn convert_to(&self, amount: f64, target: &Currency) -> f64 {
        round2(amount * self.rate / target.rate)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// All known currencies, keyed by lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyTable {
    currencies: BTreeMap<String, Currency>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.add(Currency::new("Gold", "G", 1.0));
        table.add(Currency::new("Silver", "S", 0.5));
        table.add(Currency::new("Platinum", "P", 2.0));
        table
    }
}

impl CurrencyTable {
    /// A table with no currencies.
    pub fn empty() -> Self {
        Self {
            currencies: BTreeMap::new(),
        }
    }

    /// Add or replace a currency.
    pub fn add(&mut self, currency: Currency) {
        self.currencies
            .insert(currency.name.to_lowercase(), currency);
    }

    /// Look up a currency by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Currency> {
        self.currencies.get(&name.to_lowercase())
    }

    /// All currencies in name order.
    pub fn all(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }

    /// Units of `to` per unit of `from`. Falls back to 1.0 if either is unknown.
    pub fn exchange_rate(&self, from: &str, to: &str) -> f64 {
        match (self.get(from), self.get(to)) {
            (Some(f), Some(t)) => f.rate / t.rate,
            _ => 1.0,
        }
    }

    /// Convert between two named currencies, rounded to two decimals.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> CoreResult<f64> {
        let source = self
            .get(from)
            .ok_or_else(|| CoreError::UnknownCurrency(from.to_string()))?;
        let target = self
            .get(to)
            .ok_or_else(|| CoreError::UnknownCurrency(to.to_string()))?;
        Ok(source.convert_to(amount, target))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
