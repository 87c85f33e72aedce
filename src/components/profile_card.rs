use dioxus::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero_section::HeroSection;
use crate::components::skills_grid::SkillsGrid;
use crate::components::social_links::SocialLinksSection;
use crate::stores::profile_store::Profile;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub profile: Profile,
}

/// The business card screen: a scrollable column over a fixed gradient,
/// stacking hero, contact, social links and skills in that order.
#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    rsx! {
        div {
            class: "min-h-screen h-screen overflow-y-auto bg-gradient-to-b from-[#667eea] via-[#764ba2] to-[#f093fb]",
            div {
                class: "max-w-xl mx-auto flex flex-col gap-5 px-5 py-10",

                HeroSection { profile: props.profile.clone() }
                ContactSection { profile: props.profile.clone() }
                SocialLinksSection { links: props.profile.social_links.clone() }
                SkillsGrid { skills: props.profile.skills.clone() }
            }
        }
    }
}
