//! UX VOC Analyzer - Rule-based UX research analysis
//!
//! Turns a product domain, audience, voice-of-customer lines and pain-point
//! tags into design recommendations, a color palette with contrast checks,
//! CTQ trees, affinity groups, a Pareto ranking, a Kano register, Nielsen
//! heuristic scores and a standalone HTML report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
