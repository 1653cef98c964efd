pub mod composer;
pub mod config_loader;
pub mod template_engine;
