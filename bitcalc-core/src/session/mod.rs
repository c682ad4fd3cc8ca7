pub mod session;

pub mod prelude {
    pub use super::session::*;
}

#[cfg(test)]
mod tests;
