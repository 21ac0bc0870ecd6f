pub mod credentials;
pub mod reports;
pub mod tester;

pub use credentials::{Credentials, resolve_seeds};
pub use tester::{LogicTester, ScenarioResult};
