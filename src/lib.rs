//! UX Synthesizer - Qualitative UX research synthesis service
//!
//! This crate turns raw research text (interview transcripts, survey
//! responses, usability notes) into a structured analysis: pain points,
//! motivations, themes, affinity groups, a codebook, personas and
//! recommendations. Analysis comes from a hosted language model when a
//! credential is configured, and from a fixed demonstration payload otherwise.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
