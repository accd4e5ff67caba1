//! Infrastructure concerns shared by the binary

pub mod logging;
