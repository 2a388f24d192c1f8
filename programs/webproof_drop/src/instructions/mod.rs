pub mod bind_instance;
pub mod claim;
pub mod claim_with_ephemeral_key;
pub mod create_campaign;
pub mod create_instance;
pub mod initialize_factory;
pub mod set_mastercopy;
pub mod stake;
pub mod stop_campaign;
pub mod update_metadata;

pub use bind_instance::*;
pub use claim::*;
pub use claim_with_ephemeral_key::*;
pub use create_campaign::*;
pub use create_instance::*;
pub use initialize_factory::*;
pub use set_mastercopy::*;
pub use stake::*;
pub use stop_campaign::*;
pub use update_metadata::*;
