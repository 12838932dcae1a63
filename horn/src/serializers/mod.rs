//! Serializers for the persisted rule-set form and derived outputs.

pub mod dot;
pub mod json;
