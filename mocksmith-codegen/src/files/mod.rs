//! Shared support definitions emitted once per generation pass.
//!
//! One struct per emitted blob, each rendering into the support namespace
//! chosen by the generator options.

mod builder_contract;
mod list_builders;
mod mock_helper;
mod mock_settings;
mod substitute_contract;

pub use builder_contract::BuilderContract;
pub use list_builders::ListBuilders;
pub use mock_helper::MockHelper;
pub use mock_settings::MockSettings;
pub use substitute_contract::SubstituteContract;
