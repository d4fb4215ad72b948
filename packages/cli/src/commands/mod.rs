mod generate;
mod serve;

pub use generate::{generate, GenerateArgs};
pub use serve::{serve, ServeArgs};
