//! Integration tests for the gamma calibration crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the curve model, derivation, validation, and the on-disk
//! document format.
