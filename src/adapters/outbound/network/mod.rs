/// Network adapters for the comparison service API
mod http_compare_client;
mod http_quality_client;
mod http_support;

pub use http_compare_client::HttpCompareClient;
pub use http_quality_client::HttpQualityClient;
