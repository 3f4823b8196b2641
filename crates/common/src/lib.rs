use clap::Parser;
use store::Store;

pub struct AppState {
    pub store: Store,
    pub config: Config,
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Pin the transaction generator's RNG for reproducible demo data.
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,
}
