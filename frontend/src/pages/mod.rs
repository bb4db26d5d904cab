pub mod roulette;
pub mod setup;
