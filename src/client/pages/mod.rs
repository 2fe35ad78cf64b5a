mod accounts;
mod apps;
mod chat;
mod contacts;
mod debug;
mod home;
mod not_found;
mod settings;
mod teams;

pub use accounts::AccountsPage;
pub use apps::AppsPage;
pub use chat::ChatPage;
pub use contacts::ContactsPage;
pub use debug::DebugPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
pub use teams::TeamsPage;
