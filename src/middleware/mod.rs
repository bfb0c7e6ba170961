pub mod remember_me;

pub use remember_me::{RememberMeState, remember_me_middleware};
