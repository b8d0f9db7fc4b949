pub use super::city::Entity as City;
pub use super::climate::Entity as Climate;
pub use super::cost_of_living::Entity as CostOfLiving;
pub use super::guide::Entity as Guide;
pub use super::housing::Entity as Housing;
pub use super::metrics::Entity as Metrics;
pub use super::transport_budget::Entity as TransportBudget;
pub use super::university::Entity as University;
