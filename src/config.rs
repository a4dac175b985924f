/// Runtime configuration, read from the environment.
///
/// `main` loads `.env` first, so a local file can supply any of these.
pub struct Config {
    /// Wallet label shown in the rendered output.
    pub wallet: String,
    /// Optional JSON snapshot file; the built-in fixture is used when
    /// unset.
    pub balances_file: Option<String>,
    /// Optional price feed URL; the built-in demo table is used when
    /// unset.
    pub prices_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            wallet: std::env::var("WALLET_ADDRESS").unwrap_or_else(|_| "demo-wallet".to_string()),
            balances_file: std::env::var("BALANCES_FILE").ok(),
            prices_url: std::env::var("PRICES_URL").ok(),
        }
    }
}
