// Purpose
// - Represents the domain state of a bank account after folding facts.
// - Encodes lifecycle as explicit variants: never opened, active, closed.
//
// Notes
// - Money is rust_decimal::Decimal everywhere. No floating point.
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountState {
    #[default]
    None,
    Active {
        holder_name: String,
        account_type: String,
        balance: Decimal,
        currency: String,
    },
    Closed {
        holder_name: String,
        account_type: String,
        final_balance: Decimal,
        currency: String,
        reason: String,
    },
}

impl AccountState {
    pub fn balance(&self) -> Decimal {
        match self {
            AccountState::None => Decimal::ZERO,
            AccountState::Active { balance, .. } => *balance,
            AccountState::Closed { final_balance, .. } => *final_balance,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, AccountState::Closed { .. })
    }
}
