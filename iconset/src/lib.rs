pub mod icon;

pub use icon::{IconsetError, IconsetProcessor};
