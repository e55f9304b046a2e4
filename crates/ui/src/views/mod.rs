mod home;
mod learn;
mod lesson;
mod paywall;
mod profile;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use learn::LearnView;
pub use lesson::{LessonRunner, LessonView};
pub use paywall::PaywallView;
pub use profile::ProfileView;
pub use state::{ViewError, ViewState, view_state_from_resource};
