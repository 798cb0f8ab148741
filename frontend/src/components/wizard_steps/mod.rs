//! One component per wizard selection step.

mod site_step;
pub use site_step::SiteStep;

mod types_step;
pub use types_step::TypesStep;

mod keywords_step;
pub use keywords_step::KeywordsStep;

mod locations_step;
pub use locations_step::LocationsStep;

mod excludes_step;
pub use excludes_step::ExcludesStep;
