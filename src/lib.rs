//! Hackmatch - GitHub Profile Hackathon Recommender
//!
//! This crate analyzes a user's public GitHub activity into a scored
//! developer profile and turns it into personalized hackathon project
//! recommendations via an AI provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
