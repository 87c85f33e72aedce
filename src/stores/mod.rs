// Data stores
// The immutable profile record displayed by the card

pub mod profile_store;

pub use profile_store::{PlatformIcon, Profile, Skill, SocialLink};
