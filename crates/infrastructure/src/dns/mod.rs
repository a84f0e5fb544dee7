pub mod transport;

pub use transport::https::HttpsJsonClient;
