pub mod shared {
    pub mod core {
        pub mod entity;
        pub mod errors;
        pub mod fact;
        pub mod primitives;
        pub mod projection;
    }
    pub mod infrastructure {
        pub mod fact_log;
        pub mod repository;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod decision;
            pub mod handler;
            pub mod open_account {
                pub mod command;
                pub mod decide;
            }
            pub mod deposit_money {
                pub mod command;
                pub mod decide;
            }
            pub mod withdraw_money {
                pub mod command;
                pub mod decide;
            }
            pub mod close_account {
                pub mod command;
                pub mod decide;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod transaction_history;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
