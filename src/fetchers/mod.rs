mod request;

pub use request::{race_timeout, RequestFetcher};
