//! Platform-independent interaction logic for the folio front-end.
//!
//! Nothing in here touches the DOM. The web crate feeds raw input (pointer
//! samples, scroll offsets, intersection reports, timer expiries) into these
//! types and applies the effects they hand back.

pub mod animation;
pub mod constants;
pub mod contact;
pub mod counter;
pub mod effects;
pub mod error;
pub mod filter;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod rate_limit;
pub mod smoothing;
pub mod theme;
pub mod visibility;

pub use animation::*;
pub use error::{FolioError, Result};
pub use pointer::*;
pub use smoothing::*;
