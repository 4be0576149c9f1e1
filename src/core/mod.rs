pub mod trajectory;
pub mod units;
pub mod window;
