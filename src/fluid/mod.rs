//! 작동 유체 물성 조회 경계.

pub mod if97;
pub mod property;

pub use if97::If97Lookup;
pub use property::*;
