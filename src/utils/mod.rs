pub mod load_error;
pub mod stops_loader;
