pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod icons;
pub mod pages;
pub mod services;
