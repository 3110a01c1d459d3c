pub mod listings;
pub mod provider_error;

pub use listings::ListingsProvider;
pub use provider_error::ProviderError;
