use std::rc::Rc;

use crate::stores::profile_store::Profile;

/// Outbound navigation capability.
///
/// Clicks on the card hand the selected identity to this port; wiring it
/// to a real mail client, dialer, map, or browser is a separate concern
/// and lives behind this trait.
pub trait NavigationPort {
    fn open_mail(&self, address: &str);
    fn open_dialer(&self, number: &str);
    fn open_map(&self, location: &str);
    fn open_browser(&self, url: &str);
}

/// Identity of a contact row. The three rows always render in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
    Location,
}

impl ContactChannel {
    /// Forward a click on this row to the port, with the row's value from
    /// the profile.
    pub fn dispatch(self, profile: &Profile, nav: &dyn NavigationPort) {
        match self {
            ContactChannel::Email => nav.open_mail(&profile.contact_email),
            ContactChannel::Phone => nav.open_dialer(&profile.phone_number),
            ContactChannel::Location => nav.open_map(&profile.location),
        }
    }
}

/// Placeholder port: traces the request and does nothing else.
pub struct NoopNavigator;

impl NavigationPort for NoopNavigator {
    fn open_mail(&self, address: &str) {
        log::debug!("open_mail requested for {} (not implemented)", address);
    }

    fn open_dialer(&self, number: &str) {
        log::debug!("open_dialer requested for {} (not implemented)", number);
    }

    fn open_map(&self, location: &str) {
        log::debug!("open_map requested for {} (not implemented)", location);
    }

    fn open_browser(&self, url: &str) {
        log::debug!("open_browser requested for {} (not implemented)", url);
    }
}

/// Cloneable handle shared with components through Dioxus context, so a
/// real port implementation can be substituted without touching the
/// renderer.
#[derive(Clone)]
pub struct Navigator(pub Rc<dyn NavigationPort>);

impl Navigator {
    pub fn noop() -> Self {
        Self(Rc::new(NoopNavigator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::profile_store::sample_profile;
    use std::cell::RefCell;

    /// Test double recording every call the port receives.
    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<(&'static str, String)>>,
    }

    impl NavigationPort for RecordingNavigator {
        fn open_mail(&self, address: &str) {
            self.calls.borrow_mut().push(("mail", address.to_string()));
        }

        fn open_dialer(&self, number: &str) {
            self.calls.borrow_mut().push(("dialer", number.to_string()));
        }

        fn open_map(&self, location: &str) {
            self.calls.borrow_mut().push(("map", location.to_string()));
        }

        fn open_browser(&self, url: &str) {
            self.calls.borrow_mut().push(("browser", url.to_string()));
        }
    }

    #[test]
    fn test_email_row_dispatches_once_with_address() {
        let profile = sample_profile();
        let nav = RecordingNavigator::default();
        ContactChannel::Email.dispatch(&profile, &nav);
        let calls = nav.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("mail", profile.contact_email.clone()));
    }

    #[test]
    fn test_phone_row_dispatches_once_with_number() {
        let profile = sample_profile();
        let nav = RecordingNavigator::default();
        ContactChannel::Phone.dispatch(&profile, &nav);
        let calls = nav.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("dialer", profile.phone_number.clone()));
    }

    #[test]
    fn test_location_row_dispatches_once_with_location() {
        let profile = sample_profile();
        let nav = RecordingNavigator::default();
        ContactChannel::Location.dispatch(&profile, &nav);
        let calls = nav.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("map", profile.location.clone()));
    }

    #[test]
    fn test_social_click_opens_browser_with_url() {
        let profile = sample_profile();
        let nav = RecordingNavigator::default();
        nav.open_browser(&profile.social_links[1].profile_url);
        let calls = nav.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("browser", "github.com/jordanreyes".to_string()));
    }

    #[test]
    fn test_noop_navigator_accepts_every_channel() {
        // Must not panic; the placeholder has no other observable effect.
        let profile = sample_profile();
        let nav = NoopNavigator;
        ContactChannel::Email.dispatch(&profile, &nav);
        ContactChannel::Phone.dispatch(&profile, &nav);
        ContactChannel::Location.dispatch(&profile, &nav);
        nav.open_browser(&profile.social_links[0].profile_url);
    }
}
