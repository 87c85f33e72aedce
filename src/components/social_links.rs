use dioxus::prelude::*;

use crate::components::icons::{CodeIcon, GlobeIcon, ShareIcon, UserIcon};
use crate::services::navigation::Navigator;
use crate::stores::profile_store::{PlatformIcon, SocialLink};
use crate::utils::format::truncate_url;

#[derive(Props, Clone, PartialEq)]
pub struct SocialLinksSectionProps {
    pub links: Vec<SocialLink>,
}

/// Horizontally scrollable strip of social cards, one per link, in input
/// order.
#[component]
pub fn SocialLinksSection(props: SocialLinksSectionProps) -> Element {
    rsx! {
        div {
            class: "w-full bg-white/95 rounded-[20px] shadow-lg p-6",

            // Section heading
            div {
                class: "flex items-center gap-3 mb-5",
                ShareIcon { class: "w-6 h-6 text-[#667eea]".to_string() }
                h2 {
                    class: "text-xl font-bold text-[#2c3e50]",
                    "Connect"
                }
            }

            div {
                class: "flex gap-4 overflow-x-auto pb-2",
                for link in props.links.iter() {
                    SocialLinkCard { link: link.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SocialLinkCardProps {
    pub link: SocialLink,
}

#[component]
pub fn SocialLinkCard(props: SocialLinkCardProps) -> Element {
    let nav = use_context::<Navigator>();
    let url = props.link.profile_url.clone();
    let display_url = truncate_url(&props.link.profile_url);

    rsx! {
        div {
            class: "w-36 h-24 flex-shrink-0 flex flex-col items-center justify-center gap-1 rounded-2xl bg-[#667eea]/10 cursor-pointer hover:bg-[#667eea]/20 transition-colors",
            onclick: move |_| nav.0.open_browser(&url),

            {platform_glyph(props.link.platform_icon)}

            div {
                class: "text-sm font-semibold text-[#2c3e50] text-center",
                "{props.link.platform_name}"
            }
            div {
                class: "text-[10px] text-[#7f8c8d] text-center",
                "{display_url}"
            }
        }
    }
}

fn platform_glyph(icon: PlatformIcon) -> Element {
    let class = "w-8 h-8 text-[#667eea]".to_string();
    match icon {
        PlatformIcon::Person => rsx! { UserIcon { class } },
        PlatformIcon::Code => rsx! { CodeIcon { class } },
        PlatformIcon::Globe => rsx! { GlobeIcon { class } },
    }
}
