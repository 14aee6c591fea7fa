//! Agent wiring - tools, preamble and runtime settings for an external agent loop.
//!
//! The loop itself (model calls, tool selection, termination) belongs to the
//! agent runtime. This module hands it:
//! 1. The registered tools with their usage contracts
//! 2. The fixed instruction preamble
//! 3. The runtime settings the tools were written against
//! 4. A dispatch entry point that never fails, returning error markers instead

mod prompt;
mod wiring;

pub use prompt::{build_system_prompt, PREAMBLE};
pub use wiring::{Agent, AgentSettings, ZERO_SHOT_REACT_DESCRIPTION};
