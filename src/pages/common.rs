use chrono::Datelike;
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Anchor id of the contact section on both landing pages.
pub const CONTACT_ANCHOR: &str = "contact-form-section";

/// Smooth-scrolls to the contact section once the form has had a chance to
/// render. Does nothing when the anchor is not in the current view.
pub fn scroll_to_contact(delay_ms: u32) {
    let timeout = Timeout::new(delay_ms, move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(CONTACT_ANCHOR) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });
    timeout.forget();
}

/// Shared page footer.
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="page-footer">
            <div class="footer-content">
                <p>
                    {"Questions before requesting a proposal? Write to "}
                    <a href="mailto:hello@trialbridge.com">{"hello@trialbridge.com"}</a>
                </p>
                <p class="footer-note">
                    {format!("© {} TrialBridge. Community outreach and nurse-led pre-screening for clinical trials.", year)}
                </p>
            </div>
        </footer>
    }
}
