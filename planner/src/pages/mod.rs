pub mod plan_page;
