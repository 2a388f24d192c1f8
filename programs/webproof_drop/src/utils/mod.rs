pub mod addresses;
pub mod token;
pub mod webproof;

pub use addresses::*;
pub use token::*;
pub use webproof::*;
