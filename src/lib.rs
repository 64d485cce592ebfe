pub mod cache;
pub mod catalog;
pub mod console;
pub mod model;
pub mod preview;
pub mod remote;
pub mod resolver;
pub mod session;
