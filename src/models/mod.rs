// src/models/mod.rs

pub mod answer;
pub mod grade;
pub mod health;
pub mod question;
pub mod student;
pub mod topic;
