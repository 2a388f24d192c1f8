pub mod campaign_state;
pub mod factory_state;
pub mod proxy_state;
pub mod receipt_state;

pub use campaign_state::*;
pub use factory_state::*;
pub use proxy_state::*;
pub use receipt_state::*;
