mod settings;
mod state;
mod test_invocation;

pub use settings::Settings;
pub use state::AppState;
pub use test_invocation::TestInvocation;
