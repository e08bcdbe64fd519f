pub mod activities;
pub mod app;
pub mod health;
