pub mod account_mgmt;
pub mod constants;
pub mod helpers;
pub mod interfaces;
