pub mod account;
pub mod biodata;
pub mod health_result;
pub mod instrument;
pub mod option;
pub mod profile;
