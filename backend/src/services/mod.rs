//! Business logic services

pub mod bmi;
