pub mod app;
pub mod convert;
pub mod features;
pub mod inference;
pub mod state;
pub mod ui;
pub mod verdict;
