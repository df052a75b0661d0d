use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::proposal_form::{submit_proposal, ProposalForm, ProposalRequest};
use crate::pages::common;
use crate::state::lead_capture::LeadCapture;
use crate::state::role_handoff::{self, Role};

/// Site- and vendor-facing landing page.
#[function_component(SiteLanding)]
pub fn site_landing() -> Html {
    let capture = use_state(LeadCapture::default);
    let role_param = use_search_param(role_handoff::ROLE_PARAM.to_string());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Consume the role handoff carried over from another page: auto-open
    // the form once, then rewrite the URL so a reload replays nothing.
    {
        let capture = capture.clone();
        use_effect_with_deps(
            move |param: &Option<String>| {
                // This page only serves site/vendor proposals.
                let carried = role_handoff::consume(param.as_deref())
                    .filter(|role| *role == Role::Site);
                if let Some(role) = carried {
                    capture.set((*capture).open_form(role));
                    common::scroll_to_contact(100);
                    role_handoff::clear_param();
                }
                || ()
            },
            role_param,
        );
    }

    let open_form = {
        let capture = capture.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            capture.set((*capture).open_form(Role::Site));
            common::scroll_to_contact(100);
        })
    };

    let on_submit = {
        let capture = capture.clone();
        Callback::from(move |request: ProposalRequest| {
            let next = (*capture).begin_submit();
            if !next.is_submitting() {
                return;
            }
            capture.set(next.clone());
            let capture = capture.clone();
            spawn_local(async move {
                match submit_proposal(&request).await {
                    Ok(()) => capture.set(next.succeed(request.email.clone())),
                    Err(message) => capture.set(next.fail(message)),
                }
            });
        })
    };

    html! {
        <div class="site-landing">
            <header class="site-hero">
                <div class="site-hero-content">
                    <h1>{"Site & Vendor Solutions"}</h1>
                    <p>
                        {"Strengthen your site's recruitment with comprehensive support services built for clinical research sites and vendors."}
                    </p>
                    <button class="cta-button" onclick={open_form.clone()}>
                        {"Request Your Proposal"}
                    </button>
                </div>
            </header>

            <section class="benefits-section">
                <div class="section-inner">
                    <h2>{"Why Sites Choose TrialBridge"}</h2>
                    <p class="section-lead">{"Support that compounds your recruitment success"}</p>
                    <div class="benefits-grid">
                        <div class="benefit-tile">
                            <span class="benefit-keyword">{"Enhanced"}</span>
                            <span class="benefit-title">{"Community Outreach"}</span>
                            <span class="benefit-text">{"Build stronger relationships in your catchment area"}</span>
                        </div>
                        <div class="benefit-tile">
                            <span class="benefit-keyword">{"Professional"}</span>
                            <span class="benefit-title">{"Recruitment Materials"}</span>
                            <span class="benefit-text">{"High-quality, study-specific materials"}</span>
                        </div>
                        <div class="benefit-tile">
                            <span class="benefit-keyword">{"Pre-screened"}</span>
                            <span class="benefit-title">{"Qualified Leads"}</span>
                            <span class="benefit-text">{"Nurse-verified, eligible participants"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="site-services-section">
                <div class="section-inner">
                    <h2>{"Our Services for Sites"}</h2>
                    <p class="section-lead">{"Recruitment support tailored to your site's needs"}</p>
                    <div class="site-services-grid">
                        <div class="site-service-card">
                            <h3>{"Marketing & Materials"}</h3>
                            <ul>
                                <li>{"Custom promotional materials"}</li>
                                <li>{"Professional flyers and brochures"}</li>
                                <li>{"Study-specific folders and handouts"}</li>
                            </ul>
                        </div>
                        <div class="site-service-card">
                            <h3>{"Digital Presence"}</h3>
                            <ul>
                                <li>{"Custom landing page websites"}</li>
                                <li>{"Interest capture forms"}</li>
                                <li>{"Referral tracking"}</li>
                            </ul>
                        </div>
                        <div class="site-service-card">
                            <h3>{"Community Outreach"}</h3>
                            <ul>
                                <li>{"High-traffic location visits"}</li>
                                <li>{"Community event participation"}</li>
                                <li>{"Direct patient engagement"}</li>
                            </ul>
                        </div>
                        <div class="site-service-card">
                            <h3>{"Clinical Support"}</h3>
                            <ul>
                                <li>{"Licensed nurse pre-screening"}</li>
                                <li>{"Eligibility verification"}</li>
                                <li>{"Dedicated project manager with KPI reporting"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section id={common::CONTACT_ANCHOR} class="contact-section">
                <div class="section-inner">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p class="section-lead">{"Request a personalized proposal for your site"}</p>
                    {
                        if let Some(email) = capture.submitted_email() {
                            html! {
                                <div class="thank-you-panel">
                                    <div class="thank-you-mark">{"✓"}</div>
                                    <h3>{"Thank You!"}</h3>
                                    <p>{"Your proposal request has been submitted."}</p>
                                    <p>
                                        {"A team member will get back to you shortly at "}
                                        <strong>{email}</strong>
                                        {" with your personalized proposal."}
                                    </p>
                                </div>
                            }
                        } else if capture.shows_form() {
                            html! {
                                <ProposalForm
                                    role={capture.role().unwrap_or(Role::Site)}
                                    submitting={capture.is_submitting()}
                                    error={capture.error().map(String::from)}
                                    on_submit={on_submit.clone()}
                                />
                            }
                        } else if capture.shows_call_to_action() {
                            html! {
                                <div class="contact-cta">
                                    <p>{"Ready to strengthen your site's recruitment?"}</p>
                                    <button class="cta-button" onclick={open_form.clone()}>
                                        {"Request Your Proposal"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            {common::footer()}

            <style>
                {r#"
                    .site-landing {
                        color: #2b3650;
                    }

                    .site-landing h2 {
                        font-size: 2.25rem;
                        color: #0B1220;
                        text-align: center;
                        margin: 0 0 1rem 0;
                    }

                    .section-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .section-lead {
                        font-size: 1.2rem;
                        color: #10224E;
                        text-align: center;
                        margin: 0 0 3rem 0;
                    }

                    .site-hero {
                        background: linear-gradient(135deg, rgba(22, 177, 240, 0.12), rgba(86, 240, 200, 0.12));
                        padding: 5rem 1.5rem;
                        text-align: center;
                    }

                    .site-hero-content {
                        max-width: 760px;
                        margin: 0 auto;
                    }

                    .site-hero h1 {
                        font-size: 2.75rem;
                        color: #0B1220;
                        margin: 0 0 1.25rem 0;
                    }

                    .site-hero p {
                        font-size: 1.2rem;
                        color: #10224E;
                        margin: 0 0 2.5rem 0;
                    }

                    .cta-button {
                        background: #16B1F0;
                        color: #ffffff;
                        font-size: 1.15rem;
                        font-weight: 700;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem 2.5rem;
                        cursor: pointer;
                        box-shadow: 0 6px 20px rgba(22, 177, 240, 0.35);
                        transition: background 0.3s ease;
                    }

                    .cta-button:hover {
                        background: #10224E;
                    }

                    .benefits-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .benefits-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }

                    .benefit-tile {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        background: #f8fafc;
                        border-radius: 14px;
                        padding: 2rem;
                        text-align: center;
                    }

                    .benefit-keyword {
                        font-size: 1.9rem;
                        font-weight: 800;
                        color: #0f766e;
                    }

                    .benefit-title {
                        font-size: 1.1rem;
                        font-weight: 700;
                        color: #0B1220;
                    }

                    .benefit-text {
                        color: #5a6782;
                    }

                    .site-services-section {
                        padding: 5rem 0;
                        background: #f1f5f9;
                    }

                    .site-services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .site-service-card {
                        background: #ffffff;
                        border-radius: 14px;
                        padding: 1.75rem;
                        box-shadow: 0 4px 16px rgba(11, 18, 32, 0.08);
                    }

                    .site-service-card h3 {
                        color: #0B1220;
                        margin: 0 0 0.75rem 0;
                    }

                    .site-service-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .site-service-card li {
                        color: #10224E;
                        padding: 0.3rem 0 0.3rem 1.4rem;
                        position: relative;
                    }

                    .site-service-card li::before {
                        content: '•';
                        position: absolute;
                        left: 0.25rem;
                        color: #16B1F0;
                    }

                    .contact-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .contact-cta {
                        text-align: center;
                    }

                    .contact-cta p {
                        font-size: 1.1rem;
                        color: #5a6782;
                        margin: 0 0 2rem 0;
                    }

                    .thank-you-panel {
                        background: rgba(16, 185, 129, 0.08);
                        border: 1px solid rgba(16, 185, 129, 0.35);
                        border-radius: 14px;
                        padding: 2.5rem;
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto;
                    }

                    .thank-you-mark {
                        font-size: 3.5rem;
                        color: #059669;
                    }

                    .thank-you-panel h3 {
                        color: #065f46;
                        font-size: 1.6rem;
                        margin: 0.5rem 0;
                    }

                    .thank-you-panel p {
                        color: #047857;
                        margin: 0.5rem 0;
                    }

                    .page-footer {
                        background: #0B1220;
                        padding: 3rem 1.5rem;
                        text-align: center;
                    }

                    .footer-content p {
                        color: #A4B0CC;
                        margin: 0.5rem 0;
                    }

                    .footer-content a {
                        color: #16B1F0;
                        text-decoration: none;
                    }

                    .footer-content a:hover {
                        color: #56F0C8;
                    }

                    .footer-note {
                        font-size: 0.85rem;
                    }

                    @media (max-width: 768px) {
                        .site-hero h1 {
                            font-size: 2rem;
                        }

                        .site-landing h2 {
                            font-size: 1.75rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
