pub mod environment;
pub mod error;
pub mod variable;

pub mod prelude {
    pub use super::{
        environment::*,
        error::*,
        variable::*
    };
}
