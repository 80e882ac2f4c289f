//! # Tutorial: Status-Coded Dispatch with statusmap
//!
//! Learn to map the variants of your types to HTTP status codes step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first registry
//! 2. [Discriminators][chapter_1] - Matchers, tags, and classes
//! 3. [Endpoints & Middleware][chapter_2] - Both branches, client and server
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
