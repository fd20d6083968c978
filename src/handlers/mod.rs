// src/handlers/mod.rs

pub mod answer;
pub mod health;
pub mod question;
pub mod student;
pub mod topic;
