//! # Story Render
//!
//! Turns normalized story cards into primitive render values for the view
//! layer: frame geometry and transforms, resolved typography, hover shadows
//! and the markup to inject for each text region.
//!
//! ## Core Components
//!
//! - **resolver**: Per-card and per-section resolution driven by `RenderConfig`
//! - **resolver::layout**: Frames, corner treatment and row alternation
//! - **resolver::hover**: Hover transition and shadow visuals
//! - **resolver::typography**: Font roles resolved to CSS font stacks
//!
//! Resolution is pure and cheap; the view layer calls it on every render pass.

pub mod resolver;

pub use resolver::*;
