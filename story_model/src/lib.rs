//! # Story Model
//!
//! The data side of the dual-column story section. Persisted story cards of
//! any schema vintage come in as raw JSON, get upgraded to the current shape,
//! and are then edited as an ordered, copy-on-write collection.
//!
//! ## Core Components
//!
//! - **color**: Hex color parsing, RGBA and shadow string synthesis
//! - **rich_text**: Rich markup / plain text bridging and bullet extraction
//! - **card**: The current StoryCard shape, seed templates and field editors
//! - **schema**: Total, idempotent normalization of legacy card objects
//! - **collection**: Ordered story list with add/remove/move/update
//! - **limits**: Value ranges offered by the editing surface
//!
//! Nothing here performs I/O. Every transformation takes its input by
//! reference or by value and hands back a new value.

pub mod card;
pub mod collection;
pub mod color;
pub mod error;
pub mod limits;
pub mod rich_text;
pub mod schema;

pub use card::*;
pub use collection::*;
pub use color::*;
pub use error::*;
pub use limits::*;
pub use rich_text::*;
pub use schema::*;
