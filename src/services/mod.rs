//! Business logic services.

pub mod client;
pub mod dashboard;
pub mod demo;
pub mod score;

pub use client::ComplianceClient;
pub use demo::DemoDataset;
