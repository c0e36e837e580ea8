use crate::modules::accounts::core::state::AccountState;
use rust_decimal::Decimal;

pub fn active_with_balance(balance: Decimal) -> AccountState {
    AccountState::Active {
        holder_name: "John Doe".to_string(),
        account_type: "CHECKING".to_string(),
        balance,
        currency: "EUR".to_string(),
    }
}

pub fn closed_with_balance(final_balance: Decimal) -> AccountState {
    AccountState::Closed {
        holder_name: "John Doe".to_string(),
        account_type: "CHECKING".to_string(),
        final_balance,
        currency: "EUR".to_string(),
        reason: "Account holder requested closure".to_string(),
    }
}
