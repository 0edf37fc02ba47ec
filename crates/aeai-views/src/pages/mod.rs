//! Full-page views, one module per route family.

mod about;
mod careers;
mod contact;
mod data;
mod home;
mod industries;
mod insights;
mod lab;
mod not_found;
mod research;
mod services;

pub use about::about;
pub use careers::{careers_index, job_detail};
pub use contact::{contact, contact_submitted};
pub use data::{data_index, dataset_detail};
pub use home::home;
pub use industries::{industries_index, industry_detail};
pub use insights::{insight_detail, insights_index};
pub use lab::{guide_detail, lab};
pub use not_found::not_found;
pub use research::{paper_detail, research_index};
pub use services::{service_detail, services_index};
