//! Configuration system for the recommender.
//! TOML-based, resolved as env > project file > compiled defaults.

pub mod collaborative_config;
pub mod content_config;
pub mod defaults;
pub mod dispatch_config;
pub mod factorization_config;
pub mod observability_config;
pub mod popularity_config;
pub mod reco_config;

pub use collaborative_config::CollaborativeConfig;
pub use content_config::ContentConfig;
pub use dispatch_config::DispatchConfig;
pub use factorization_config::FactorizationConfig;
pub use observability_config::ObservabilityConfig;
pub use popularity_config::PopularityConfig;
pub use reco_config::RecoConfig;
