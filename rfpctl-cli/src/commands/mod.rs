pub mod compare;
pub mod config;
pub mod rfp;
pub mod send;
pub mod vendors;
