// Infrastructure layer - Configuration and system adapters
pub mod config;
pub mod system_clock;
