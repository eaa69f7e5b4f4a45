mod mock_profile_repository;

pub use mock_profile_repository::MockProfileRepository;
