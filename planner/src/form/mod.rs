pub mod controller;
pub mod draft;
pub mod rows;
