//! Interactive terminal chat experience.
//!
//! This module implements the chat loop: async readline input, a thinking
//! spinner while an exchange is in flight, markdown rendering of assistant
//! turns, slash commands, and the welcome banner.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
