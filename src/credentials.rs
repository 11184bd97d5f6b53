use serde::Serialize;

/// Number of accounts the exchange UI seeds in its local dev environment
/// (`user0@example.com` .. `user99@example.com`).
pub const SEEDED_ACCOUNTS: u32 = 100;

/// Placeholder login for one bot, derived only from its index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credentials {
    pub fn synthetic(index: u32) -> Self {
        Self {
            email: format!("user{index}@example.com"),
            password: format!("password{index}"),
        }
    }
}
