mod http_profile_repository;
mod traits;

pub use http_profile_repository::HttpProfileRepository;
pub use traits::ProfileRepository;
