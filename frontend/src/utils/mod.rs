pub mod google;
pub mod jwt;
pub mod storage;
