pub mod availability_rows;
pub mod status;
