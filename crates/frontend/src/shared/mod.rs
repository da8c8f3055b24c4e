pub mod api_utils;
pub mod components;
pub mod navigation;
pub mod notifier;
pub mod page_standard;
