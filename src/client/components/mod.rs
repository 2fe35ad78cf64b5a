mod alignment_toggle;
mod base_page;
mod message_bar;
mod sidebar;
pub mod style;
mod title_bar;
mod user_profile;
mod welcome_card;

pub use alignment_toggle::AlignmentToggle;
pub use base_page::{BasePage, PlaceholderPage};
pub use message_bar::{ErrorAlert, SuccessAlert};
pub use sidebar::Sidebar;
pub use title_bar::TitleBar;
pub use user_profile::UserBadge;
pub use welcome_card::{InteractiveCounter, WelcomeCard};
