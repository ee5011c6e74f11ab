pub mod admin;
pub mod applications;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod reviews;
