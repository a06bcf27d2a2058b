//! Slide panels, one per section

pub mod about;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;

pub use about::AboutPanel;
pub use blog::BlogPanel;
pub use certifications::CertificationsPanel;
pub use contact::ContactPanel;
pub use experience::ExperiencePanel;
pub use home::HomePanel;
pub use projects::ProjectsPanel;
