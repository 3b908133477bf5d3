//! Cost calculation for a season of ice time
//!
//! Everything here is pure: the same parameters always produce the same
//! result, and nothing is validated. Negative or non-finite inputs simply
//! flow through the arithmetic.

use serde::{Deserialize, Serialize};

/// Inputs to the cost formula
///
/// Missing keys fall back to the documented defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CostParameters {
    /// Dollars per ice-time slot (hour)
    pub ice_cost: f64,
    /// Number of slots booked
    pub slots: f64,
    /// Fractional surcharge rate, 0.02 = 2%
    pub fee: f64,
    /// Flat coaching fee in dollars
    pub coaches: f64,
    /// Jersey cost per player in dollars
    pub jerseys: f64,
    /// Number of players sharing the cost
    pub players: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            ice_cost: 300.0,
            slots: 50.0,
            fee: 0.02,
            coaches: 3000.0,
            jerseys: 88.0,
            players: 1.0,
        }
    }
}

impl CostParameters {
    /// All-zero parameter set
    pub fn zero() -> Self {
        Self {
            ice_cost: 0.0,
            slots: 0.0,
            fee: 0.0,
            coaches: 0.0,
            jerseys: 0.0,
            players: 0.0,
        }
    }
}

/// What the team owes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostResult {
    pub total: f64,
    pub per_player: f64,
}

/// Intermediate values of the formula, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostBreakdown {
    pub ice: f64,
    pub base: f64,
    pub fee_amount: f64,
    pub total: f64,
    pub per_player: f64,
}

impl CostBreakdown {
    pub fn result(&self) -> CostResult {
        CostResult {
            total: self.total,
            per_player: self.per_player,
        }
    }
}

/// Compute the total and per-player cost
pub fn compute(params: &CostParameters) -> CostResult {
    compute_breakdown(params).result()
}

/// Compute the cost keeping every intermediate value
///
/// The operation order is fixed so results match other implementations
/// bit for bit. A non-positive player count yields a per-player cost of 0.
pub fn compute_breakdown(params: &CostParameters) -> CostBreakdown {
    let ice = params.ice_cost * params.slots;
    let base = ice + params.coaches + params.jerseys * params.players;
    let fee_amount = base * params.fee;
    let total = base + fee_amount;
    let per_player = if params.players > 0.0 {
        total / params.players
    } else {
        0.0
    };

    CostBreakdown {
        ice,
        base,
        fee_amount,
        total,
        per_player,
    }
}
