#[path = "property/roc_properties.rs"]
mod roc_properties;
