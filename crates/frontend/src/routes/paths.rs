//! Application paths used for navigation

pub const PRODUCT_LIST_PATH: &str = "/admin/productos";
pub const PRODUCT_CREATE_PATH: &str = "/admin/productos/nuevo";
