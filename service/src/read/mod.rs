//! Read entities definitions.

pub mod explore;

pub use self::explore::Feed;
