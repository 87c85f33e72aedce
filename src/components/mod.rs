// UI Components
// This module contains all reusable UI components

pub mod contact_section;
pub mod hero_section;
pub mod icons;
pub mod profile_card;
pub mod skills_grid;
pub mod social_links;

pub use contact_section::ContactSection;
pub use hero_section::HeroSection;
pub use profile_card::ProfileCard;
pub use skills_grid::{SkillBadge, SkillsGrid};
pub use social_links::{SocialLinkCard, SocialLinksSection};
