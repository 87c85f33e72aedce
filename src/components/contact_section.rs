use dioxus::prelude::*;

use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::services::navigation::{ContactChannel, Navigator};
use crate::stores::profile_store::Profile;

/// One row of the contact list: identity, label and the displayed value.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRow {
    pub channel: ContactChannel,
    pub label: &'static str,
    pub value: String,
}

/// The three contact rows, always in this order: email, phone, location.
pub fn contact_rows(profile: &Profile) -> Vec<ContactRow> {
    vec![
        ContactRow {
            channel: ContactChannel::Email,
            label: "Email",
            value: profile.contact_email.clone(),
        },
        ContactRow {
            channel: ContactChannel::Phone,
            label: "Phone",
            value: profile.phone_number.clone(),
        },
        ContactRow {
            channel: ContactChannel::Location,
            label: "Location",
            value: profile.location.clone(),
        },
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct ContactSectionProps {
    pub profile: Profile,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    rsx! {
        div {
            class: "w-full bg-white/95 rounded-[20px] shadow-lg p-6",

            // Section heading
            div {
                class: "flex items-center gap-3 mb-5",
                MailIcon { class: "w-6 h-6 text-[#667eea]".to_string() }
                h2 {
                    class: "text-xl font-bold text-[#2c3e50]",
                    "Contact"
                }
            }

            div {
                class: "space-y-3",
                for row in contact_rows(&props.profile) {
                    ContactRowItem {
                        row,
                        profile: props.profile.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ContactRowItemProps {
    row: ContactRow,
    profile: Profile,
}

#[component]
fn ContactRowItem(props: ContactRowItemProps) -> Element {
    let nav = use_context::<Navigator>();
    let channel = props.row.channel;
    let profile = props.profile.clone();

    rsx! {
        div {
            class: "flex items-center gap-4 p-4 bg-[#f8f9fa] rounded-xl cursor-pointer hover:bg-[#667eea]/5 transition-colors",
            onclick: move |_| channel.dispatch(&profile, &*nav.0),

            div {
                class: "w-10 h-10 rounded-full bg-[#667eea]/10 flex items-center justify-center flex-shrink-0",
                {channel_icon(channel)}
            }

            div {
                class: "min-w-0",
                div {
                    class: "text-xs font-medium text-[#7f8c8d]",
                    "{props.row.label}"
                }
                div {
                    class: "text-base font-semibold text-[#2c3e50] truncate",
                    "{props.row.value}"
                }
            }
        }
    }
}

fn channel_icon(channel: ContactChannel) -> Element {
    let class = "w-5 h-5 text-[#667eea]".to_string();
    match channel {
        ContactChannel::Email => rsx! { MailIcon { class } },
        ContactChannel::Phone => rsx! { PhoneIcon { class } },
        ContactChannel::Location => rsx! { MapPinIcon { class } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::profile_store::sample_profile;

    #[test]
    fn test_rows_are_email_phone_location_in_order() {
        let rows = contact_rows(&sample_profile());
        let channels: Vec<ContactChannel> = rows.iter().map(|r| r.channel).collect();
        assert_eq!(
            channels,
            vec![
                ContactChannel::Email,
                ContactChannel::Phone,
                ContactChannel::Location
            ]
        );
    }

    #[test]
    fn test_row_order_does_not_depend_on_profile_content() {
        let mut profile = sample_profile();
        profile.contact_email = "zzz@example.com".to_string();
        profile.phone_number = "000".to_string();
        profile.location = "Anywhere".to_string();

        let rows = contact_rows(&profile);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].channel, ContactChannel::Email);
        assert_eq!(rows[1].channel, ContactChannel::Phone);
        assert_eq!(rows[2].channel, ContactChannel::Location);
    }

    #[test]
    fn test_rows_carry_profile_values() {
        let profile = sample_profile();
        let rows = contact_rows(&profile);
        assert_eq!(rows[0].value, profile.contact_email);
        assert_eq!(rows[1].value, profile.phone_number);
        assert_eq!(rows[2].value, profile.location);
    }
}
