pub mod gates;
pub mod run;
