//! Legal calculation engine for a Brazilian legal-services platform.
//!
//! This crate implements the deterministic formulas behind the "Cálculos
//! Jurídicos" feature: severance pay, overtime, night-shift and hazard
//! premiums, monetary correction, attorney fees, child support, asset
//! division and social-security contribution time. Each calculation is a
//! pure function from an [`models::InputRecord`] to a
//! [`models::ResultRecord`]; the HTTP layer in [`api`] is a thin wrapper
//! around [`calculation::compute`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod error;
pub mod models;
pub mod presenter;
