pub mod dispatch;
pub mod preview;
pub mod run;
pub mod schema;
pub mod serve;
