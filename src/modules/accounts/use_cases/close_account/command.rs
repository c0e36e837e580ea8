// Command data type for closing an account.
//
// `transfer_account_id` optionally names the account that receives the remaining balance.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseAccount {
    pub reason: String,
    pub closed_by: String,
    pub transfer_account_id: Option<String>,
}
