pub mod add;
pub mod close;
