//! In-memory mock repositories shared by the integration tests.

mod mock_company_repository;
mod mock_contact_repository;
mod mock_engagement_repository;

pub use mock_company_repository::MockCompanyRepository;
pub use mock_contact_repository::MockContactRepository;
pub use mock_engagement_repository::MockEngagementRepository;
