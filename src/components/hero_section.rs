use dioxus::prelude::*;

use crate::components::icons::UserIcon;
use crate::hooks::use_pulse_scale;
use crate::stores::profile_store::Profile;

#[derive(Props, Clone, PartialEq)]
pub struct HeroSectionProps {
    pub profile: Profile,
}

/// Top card: avatar, name, job title pill and expertise summary, wrapped
/// in the decorative pulse.
#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let scale = use_pulse_scale();
    let mut avatar_failed = use_signal(|| false);

    let profile = &props.profile;
    let avatar_url = profile.avatar_url.clone();
    let scale_value = scale();

    rsx! {
        div {
            class: "relative w-full bg-white/95 rounded-[28px] shadow-xl overflow-hidden",
            style: "transform: scale({scale_value})",

            // Decorative gradient band behind the avatar
            div {
                class: "absolute inset-x-0 top-0 h-48 bg-gradient-to-r from-[#667eea]/10 to-[#f093fb]/10",
            }

            div {
                class: "relative flex flex-col items-center px-8 py-10",

                // Avatar inside a gradient ring, with a glyph fallback if
                // the asset fails to load
                div {
                    class: "w-36 h-36 rounded-full bg-gradient-to-br from-[#667eea] to-[#764ba2] p-1.5 flex items-center justify-center",
                    div {
                        class: "w-32 h-32 rounded-full bg-white flex items-center justify-center overflow-hidden",
                        if avatar_failed() {
                            UserIcon { class: "w-16 h-16 text-[#667eea]".to_string() }
                        } else {
                            img {
                                src: "{avatar_url}",
                                alt: "Profile avatar",
                                class: "w-32 h-32 rounded-full object-cover",
                                onerror: move |_| {
                                    log::warn!("Avatar asset failed to load, showing fallback glyph");
                                    avatar_failed.set(true);
                                }
                            }
                        }
                    }
                }

                h1 {
                    class: "mt-6 text-3xl font-extrabold text-[#2c3e50] text-center",
                    "{profile.full_name}"
                }

                // Job title pill
                div {
                    class: "mt-2 px-5 py-2 rounded-full bg-[#667eea]/10",
                    span {
                        class: "text-base font-semibold text-[#667eea]",
                        "{profile.job_title}"
                    }
                }

                p {
                    class: "mt-3 px-4 text-sm text-[#7f8c8d] text-center",
                    "{profile.expertise_summary}"
                }
            }
        }
    }
}
