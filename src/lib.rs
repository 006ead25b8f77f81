// cargo watch -x 'fmt' -x 'run -- 192.168.1.10 24'

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::SubnetResult;
pub use processing::calc_subnet;
