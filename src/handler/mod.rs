pub mod article;
pub mod health;
