pub mod fees;
pub mod run;
pub mod scenario;
