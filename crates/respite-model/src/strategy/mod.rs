mod config;
pub use config::StrategyConfig;

mod parse;
pub use parse::parse_strategy;
