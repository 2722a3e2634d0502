pub mod engine;
pub mod tier;

pub use engine::{pagespeed_to_score, speed_finding, website_quality, WebsiteQuality};
pub use tier::Tier;
