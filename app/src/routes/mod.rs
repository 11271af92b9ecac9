pub mod nav;
pub mod trade;
