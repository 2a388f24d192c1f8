pub mod test_addresses;
pub mod test_campaign;
pub mod test_webproof;
