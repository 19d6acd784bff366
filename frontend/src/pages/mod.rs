pub mod agents;
pub mod dashboard;
pub mod login;
pub mod my_profile;
pub mod not_found;
pub mod properties;
