//! Analytical algorithms for the health assistant
//!
//! This module contains the two independent analysis utilities:
//! symptom matching against a static disease catalog, and vitals
//! aggregation with classification against normal ranges.

pub mod symptom;
pub mod vitals;
