//! # Auto-parts agent
//!
//! Catalog lookup tools and listing-description generation for an
//! LLM-driven auto-parts agent.
//!
//! This library provides:
//! - A client for the parts catalog (search, OEM numbers, applicability)
//! - Whitelist projections that trim catalog responses to what the agent needs
//! - A prompt composer and OpenAI-compatible client for marketplace descriptions
//! - Named single-string tools plus the instruction preamble for an agent runtime
//!
//! ## Architecture
//!
//! The agent runtime is external. On each step it calls one tool by name:
//! 1. `search_part` finds supplier candidates for an article number
//! 2. `search_part_with_sup_id` narrows to article identities
//! 3. `get_oem_part` and `get_applicability` fetch cross-references and vehicles
//! 4. `generate_description` drafts the listing from the collected envelopes
//!
//! ## Example
//!
//! ```rust,ignore
//! use autoparts_agent::{agent::Agent, config::Config};
//!
//! let agent = Agent::new(Config::from_env()?);
//! let suppliers = agent.invoke("search_part", "1987949412").await;
//! ```

pub mod agent;
pub mod catalog;
pub mod config;
pub mod description;
pub mod llm;
pub mod tools;

pub use config::Config;
