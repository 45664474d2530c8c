mod hubspot_company_repository;
mod hubspot_contact_repository;
mod hubspot_engagement_repository;
mod traits;

pub use hubspot_company_repository::HubSpotCompanyRepository;
pub use hubspot_contact_repository::HubSpotContactRepository;
pub use hubspot_engagement_repository::HubSpotEngagementRepository;
pub use traits::{CompanyRepository, ContactRepository, EngagementRepository};
