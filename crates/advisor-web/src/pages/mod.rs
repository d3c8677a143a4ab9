//! Page Components

mod advisor;
mod landing;

pub use advisor::AdvisorPage;
pub use landing::LandingPage;
