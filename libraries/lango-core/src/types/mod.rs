mod ids;
mod profile;
mod summary;

pub use ids::SummaryId;
pub use profile::Profile;
pub use summary::Summary;
