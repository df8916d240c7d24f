pub mod gad7;
pub mod k10;
pub mod mbi;
pub mod naqr;
pub mod who5;
