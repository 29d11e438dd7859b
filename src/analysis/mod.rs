pub mod aggregator;
pub mod detector;
pub mod evaluator;
pub mod kda;
pub mod scanner;
