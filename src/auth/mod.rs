pub mod authorizor;

mod user;

pub use user::{Role, User};
