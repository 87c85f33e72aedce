// External collaborators
// Outbound capabilities the UI hands click intents to

pub mod navigation;

pub use navigation::{NavigationPort, Navigator, NoopNavigator};
