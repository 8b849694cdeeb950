mod about;
mod app_overview;
mod contact;
mod demo;
mod home;
mod impact;
mod not_found;
mod privacy;
mod sections;
mod support;
mod team;
mod terms;

pub use about::AboutPage;
pub use app_overview::AppPage;
pub use contact::ContactPage;
pub use demo::DemoPage;
pub use home::HomePage;
pub use impact::ImpactPage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
pub use support::SupportPage;
pub use team::TeamPage;
pub use terms::TermsPage;
