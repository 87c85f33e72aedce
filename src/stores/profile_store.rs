use once_cell::sync::Lazy;

/// One skill badge: display label paired with an emoji glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub emoji: String,
}

impl Skill {
    pub fn new(name: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Built-in glyph set for social platforms. Each variant maps to one of
/// the inline SVG icons in `components::icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformIcon {
    Person,
    Code,
    Globe,
}

/// One external profile reference shown in the social strip.
///
/// `profile_url` is display-only; it is never fetched or opened by this
/// app, only handed to the navigation port on click.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub platform_name: String,
    pub platform_icon: PlatformIcon,
    pub profile_url: String,
}

impl SocialLink {
    pub fn new(platform_name: &str, platform_icon: PlatformIcon, profile_url: &str) -> Self {
        Self {
            platform_name: platform_name.to_string(),
            platform_icon,
            profile_url: profile_url.to_string(),
        }
    }
}

/// The static record describing the person displayed.
///
/// Fully populated at construction and never mutated; `skills` and
/// `social_links` render in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub full_name: String,
    pub job_title: String,
    pub expertise_summary: String,
    pub contact_email: String,
    pub phone_number: String,
    pub location: String,
    pub avatar_url: String,
    pub skills: Vec<Skill>,
    pub social_links: Vec<SocialLink>,
}

static SAMPLE_PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    full_name: "Jordan Reyes".to_string(),
    job_title: "Full Stack Developer".to_string(),
    expertise_summary: "Web & Mobile Technology Specialist".to_string(),
    contact_email: "jordan.reyes@example.com".to_string(),
    phone_number: "+1 (555) 012-3456".to_string(),
    location: "Austin, TX".to_string(),
    avatar_url: "/assets/avatar.jpg".to_string(),
    skills: vec![
        Skill::new("Development", "🚀"),
        Skill::new("Kotlin & Java", "☕"),
        Skill::new("Python", "🐍"),
        Skill::new("FastAPI", "⚡"),
        Skill::new("APIs", "🔗"),
        Skill::new("Git", "📝"),
    ],
    social_links: vec![
        SocialLink::new("LinkedIn", PlatformIcon::Person, "linkedin.com/in/jordanreyes"),
        SocialLink::new("GitHub", PlatformIcon::Code, "github.com/jordanreyes"),
        SocialLink::new("Portfolio", PlatformIcon::Globe, "jordanreyes.dev"),
    ],
});

/// Get the card's profile. The record lives for the process lifetime;
/// callers receive a cheap clone of the immutable data.
pub fn sample_profile() -> Profile {
    SAMPLE_PROFILE.clone()
}
