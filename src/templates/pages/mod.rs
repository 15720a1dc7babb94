pub mod agent_detail;
pub mod agents;
pub mod error;
pub mod favorites;
pub mod home;
pub mod mortgage;
pub mod properties;
pub mod property_detail;

pub use agent_detail::agent_detail_page;
pub use agents::{agents_page, AgentsVm};
pub use error::error_page;
pub use favorites::favorites_page;
pub use home::home_page;
pub use mortgage::mortgage_page;
pub use properties::{properties_page, PropertiesVm};
pub use property_detail::property_detail_page;
