#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod dispatch;
mod error;
mod message;
mod workout;

pub use dispatch::*;
pub use error::*;
pub use message::*;
pub use workout::*;
