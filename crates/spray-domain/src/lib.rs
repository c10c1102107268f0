//! Spray mixing domain: area units, the calculation engine, and stores

pub mod model;
pub mod repository;
pub mod service;
