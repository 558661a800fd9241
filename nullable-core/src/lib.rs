#![warn(missing_debug_implementations)]

pub mod error;
pub use error::{Error, Result};

pub mod codec;
pub use codec::{Codec, DecodeFor, EncodeFor};

pub mod nullable;
pub use nullable::Nullable;

pub use serde;
