pub mod env;
pub mod llm;
pub mod tracing_init;

pub use env::AppConfig;
pub use llm::LlmSettings;
pub use tracing_init::init_tracing;
