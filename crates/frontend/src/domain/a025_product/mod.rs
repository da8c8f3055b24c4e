pub mod ui;

/// Entity prefix for page ids and log lines
pub const ENTITY: &str = "a025_product";
