use std::fmt;

use serde::{Deserialize, Serialize};

use crate::signal::{signal_for_transition, Signal};
use crate::state::StateMark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeError {
    InvalidInitialCash,
    InvalidPrice,
    InvalidCash,
    InvalidPosition,
    InvalidLastPurchasePrice,
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialCash => {
                write!(f, "initial cash must be finite and non-negative")
            }
            Self::InvalidPrice => write!(f, "price must be finite and positive"),
            Self::InvalidCash => write!(f, "previous cash must be finite and non-negative"),
            Self::InvalidPosition => {
                write!(f, "previous position must be finite and non-negative")
            }
            Self::InvalidLastPurchasePrice => {
                write!(
                    f,
                    "previous last purchase price must be finite and non-negative"
                )
            }
        }
    }
}

impl std::error::Error for TradeError {}

/// One link in the append-only chain of account snapshots. The strategy
/// moves the entire balance on every executed trade, so a log is either
/// fully invested (`cash == 0`) or fully in cash (`position == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLog {
    pub state: StateMark,
    pub signal: Signal,
    pub position: f64,
    pub cash: f64,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    /// Cost basis gating profitable exits. Zero means no open purchase.
    pub last_purchase_price: f64,
    pub portfolio_value: f64,
}

impl PortfolioLog {
    /// Baseline log required before the first observation. `Bootstrap`
    /// orders below every observed state, so the first real observation
    /// compares greater and triggers a buy.
    pub fn bootstrap(initial_cash: f64) -> Result<Self, TradeError> {
        if !initial_cash.is_finite() || initial_cash < 0.0 {
            return Err(TradeError::InvalidInitialCash);
        }

        Ok(Self {
            state: StateMark::Bootstrap,
            signal: Signal::Hold,
            position: 0.0,
            cash: initial_cash,
            buy_price: None,
            sell_price: None,
            last_purchase_price: 0.0,
            portfolio_value: initial_cash,
        })
    }
}

pub fn step(state: i64, price: f64, prev: &PortfolioLog) -> Result<PortfolioLog, TradeError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(TradeError::InvalidPrice);
    }
    validate_prev(prev)?;

    let signal = signal_for_transition(state, prev.state);
    let mut next = PortfolioLog {
        state: StateMark::Observed(state),
        signal,
        position: prev.position,
        cash: prev.cash,
        buy_price: None,
        sell_price: None,
        last_purchase_price: prev.last_purchase_price,
        portfolio_value: 0.0,
    };

    match signal {
        Signal::Buy => {
            if prev.cash > 0.0 {
                next.position = prev.cash / price;
                next.cash = 0.0;
                next.buy_price = Some(price);
                next.last_purchase_price = price;
            } else {
                // A repeated buy while fully invested drops the cost basis;
                // the blocked-sell branch below deliberately keeps it.
                next.last_purchase_price = 0.0;
            }
        }
        Signal::Sell => {
            // Exit only when holding a position bought below the current price.
            if prev.position > 0.0 && price > prev.last_purchase_price {
                next.cash = prev.position * price;
                next.position = 0.0;
                next.sell_price = Some(price);
                next.last_purchase_price = 0.0;
            }
        }
        Signal::Hold => {}
    }

    next.portfolio_value = next.cash + next.position * price;
    Ok(next)
}

fn validate_prev(prev: &PortfolioLog) -> Result<(), TradeError> {
    if !prev.cash.is_finite() || prev.cash < 0.0 {
        return Err(TradeError::InvalidCash);
    }
    if !prev.position.is_finite() || prev.position < 0.0 {
        return Err(TradeError::InvalidPosition);
    }
    if !prev.last_purchase_price.is_finite() || prev.last_purchase_price < 0.0 {
        return Err(TradeError::InvalidLastPurchasePrice);
    }

    Ok(())
}
