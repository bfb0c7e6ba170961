pub mod remembered;

pub use remembered::{OptionalRememberedUser, RememberedUser};
