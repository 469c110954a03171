use std::sync::{Arc, Mutex};

pub mod api;
mod errors;

pub use errors::Error;

pub type Shared<T> = Arc<T>;
pub type Locked<T> = Mutex<T>;
