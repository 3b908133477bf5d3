//! Editable fields and numeric coercion of raw input text

use crate::calculator::CostParameters;

/// One editable cost parameter, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    IceCost,
    Slots,
    /// Fee rate edited as a percentage, stored as a fraction
    FeePercent,
    Coaches,
    Jerseys,
    Players,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::IceCost,
        Field::Slots,
        Field::FeePercent,
        Field::Coaches,
        Field::Jerseys,
        Field::Players,
    ];

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::IceCost => "Ice Cost ($/hour)",
            Field::Slots => "Slots (hours)",
            Field::FeePercent => "Fee Rate (%)",
            Field::Coaches => "Coaches ($)",
            Field::Jerseys => "Jerseys ($/player)",
            Field::Players => "Players",
        }
    }

    /// Kebab-case key, matches the `compute` flag names
    pub fn key(self) -> &'static str {
        match self {
            Field::IceCost => "ice-cost",
            Field::Slots => "slots",
            Field::FeePercent => "fee-percent",
            Field::Coaches => "coaches",
            Field::Jerseys => "jerseys",
            Field::Players => "players",
        }
    }

    /// Current value of this field as the user sees it
    pub fn read(self, params: &CostParameters) -> f64 {
        match self {
            Field::IceCost => params.ice_cost,
            Field::Slots => params.slots,
            Field::FeePercent => params.fee * 100.0,
            Field::Coaches => params.coaches,
            Field::Jerseys => params.jerseys,
            Field::Players => params.players,
        }
    }

    /// Store a user-entered value into its parameter
    pub fn write(self, params: &mut CostParameters, value: f64) {
        match self {
            Field::IceCost => params.ice_cost = value,
            Field::Slots => params.slots = value,
            Field::FeePercent => params.fee = value / 100.0,
            Field::Coaches => params.coaches = value,
            Field::Jerseys => params.jerseys = value,
            Field::Players => params.players = value,
        }
    }
}

/// Coerce raw input text into a number
///
/// Blank input counts as zero. Anything that does not parse becomes NaN,
/// which then propagates through the calculation.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a field value for an edit buffer without a trailing `.0`
pub fn format_input(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
