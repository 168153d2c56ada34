#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use stereoconf_core as core;

#[doc(inline)]
pub use stereoconf_io as io;

#[doc(inline)]
pub use stereoconf_lie as lie;
