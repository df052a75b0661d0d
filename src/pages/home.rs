use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::outcome_chart::{OutcomeChart, BEFORE_PROGRAM, WITH_PROGRAM};
use crate::components::proposal_form::{submit_proposal, ProposalForm, ProposalRequest};
use crate::components::role_modal::RoleSelectionModal;
use crate::pages::common;
use crate::state::lead_capture::LeadCapture;
use crate::state::role_handoff::{Role, RoleQuery};
use crate::Route;

/// Sponsor-facing landing page.
#[function_component(Home)]
pub fn home() -> Html {
    let capture = use_state(LeadCapture::default);
    let show_role_modal = use_state(|| false);
    let navigator = use_navigator().unwrap();

    // Scroll to top on mount; honor a #contact fragment on load and on
    // later hash changes.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if window.location().hash().ok().as_deref() == Some("#contact") {
                        common::scroll_to_contact(150);
                    }
                }

                let window = web_sys::window().unwrap();
                let hash_callback = Closure::wrap(Box::new(move || {
                    if let Some(window) = web_sys::window() {
                        if window.location().hash().ok().as_deref() == Some("#contact") {
                            common::scroll_to_contact(0);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "hashchange",
                        hash_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        hash_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let open_role_modal = {
        let show_role_modal = show_role_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_role_modal.set(true);
        })
    };

    let close_role_modal = {
        let show_role_modal = show_role_modal.clone();
        Callback::from(move |_| show_role_modal.set(false))
    };

    let on_role_select = {
        let capture = capture.clone();
        let show_role_modal = show_role_modal.clone();
        let navigator = navigator.clone();
        Callback::from(move |role: Role| {
            show_role_modal.set(false);
            match role {
                // Site and vendor proposals live on their own page; carry
                // the selection over as navigation state.
                Role::Site => {
                    let _ = navigator.push_with_query(&Route::Sites, &RoleQuery { role });
                }
                _ => {
                    capture.set((*capture).open_form(role));
                    common::scroll_to_contact(100);
                }
            }
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
        <div class="sponsor-landing">
            <RoleSelectionModal
                open={*show_role_modal}
                on_close={close_role_modal}
                on_select={on_role_select}
            />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Recruit Qualified Subjects, Fast and Predictably"}</h1>
                    <ul class="hero-points">
                        <li>{"TrialBridge builds a steady pipeline of pre-qualified subjects so your study meets its enrollment targets."}</li>
                        <li>{"Targeted community outreach combined with nurse-led pre-screening cuts screen-fail rates and keeps coordinators focused on visits."}</li>
                        <li>{"IRB-ready bilingual materials included."}</li>
                    </ul>
                    <div class="hero-badges">
                        <span class="badge badge-teal">{"Enrollment-focused"}</span>
                        <span class="badge badge-blue">{"Nurse-led pre-screen"}</span>
                        <span class="badge badge-navy">{"Community outreach"}</span>
                    </div>
                    <button class="cta-button" onclick={open_role_modal.clone()}>
                        {"Request Proposal"}
                    </button>
                </div>
            </header>

            <section class="value-section">
                <div class="section-inner">
                    <h2>{"Enrollment First"}</h2>
                    <p class="section-lead">
                        {"We combine community outreach and nurse-led pre-screening to reduce screen fails and coordinator burden."}
                    </p>
                    <div class="value-grid">
                        <div class="value-card">
                            <h3>{"Quality Over Volume"}</h3>
                            <p>{"Nurse-led pre-screening delivers eligible, engaged referrals to your sites."}</p>
                        </div>
                        <div class="value-card">
                            <h3>{"Predictable Pipeline"}</h3>
                            <p>{"Weekly outputs, transparent reporting, and fast iteration for steady accrual."}</p>
                        </div>
                        <div class="value-card">
                            <h3>{"Coordinator Relief"}</h3>
                            <p>{"We handle outreach and pre-screening so your site teams can run visits."}</p>
                        </div>
                        <div class="value-card">
                            <h3>{"Compliant by Design"}</h3>
                            <p>{"IRB-ready bilingual materials and HIPAA-aware operations, without slowing recruitment."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="compare-section">
                <div class="section-inner">
                    <h2>{"Why It Works"}</h2>
                    <div class="compare-grid">
                        <div class="compare-card compare-bad">
                            <h3>{"Online-only recruitment"}</h3>
                            <p>{"Low-intent clicks lead to no-shows and high screen-fail rates."}</p>
                        </div>
                        <div class="compare-card compare-good">
                            <h3>{"The TrialBridge approach"}</h3>
                            <p>{"In-person community outreach finds motivated candidates. A nurse pre-screen filters for eligibility. Sites receive ready-to-schedule referrals."}</p>
                            <p class="compare-result">{"Result: faster first-patient-in and steadier accrual."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="services-section">
                <div class="section-inner">
                    <h2>{"Our Services"}</h2>
                    <p class="section-lead">{"Comprehensive recruitment solutions for qualified, compliant enrollment"}</p>
                    <div class="services-grid">
                        <div class="service-card">
                            <h3>{"IRB-Ready Bilingual Materials"}</h3>
                            <ul>
                                <li>{"Study-specific flyers and brochures"}</li>
                                <li>{"Compliant promotional materials"}</li>
                                <li>{"Folders and handouts for site visits"}</li>
                            </ul>
                        </div>
                        <div class="service-card">
                            <h3>{"Digital Presence"}</h3>
                            <ul>
                                <li>{"Study landing pages with interest capture"}</li>
                                <li>{"Referral tracking"}</li>
                                <li>{"Mobile-optimized forms"}</li>
                            </ul>
                        </div>
                        <div class="service-card">
                            <h3>{"Community Outreach"}</h3>
                            <ul>
                                <li>{"High-traffic location visits"}</li>
                                <li>{"Community event participation"}</li>
                                <li>{"Direct engagement with candidates"}</li>
                            </ul>
                        </div>
                        <div class="service-card">
                            <h3>{"Nurse-Led Clinical Support"}</h3>
                            <ul>
                                <li>{"Licensed nurse pre-screening"}</li>
                                <li>{"Eligibility verification"}</li>
                                <li>{"Dedicated project manager and KPI reporting"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section class="results-section">
                <div class="section-inner">
                    <h2>{"Proven Results"}</h2>
                    <p class="section-lead">{"Lead outcomes before and with the program"}</p>
                    <div class="results-grid">
                        <div class="result-column">
                            <h3>{"Online-only recruitment"}</h3>
                            <OutcomeChart outcomes={BEFORE_PROGRAM} />
                            <p>{"Traditional channels produce volume, not enrollment."}</p>
                        </div>
                        <div class="result-column">
                            <h3>{"With TrialBridge"}</h3>
                            <OutcomeChart outcomes={WITH_PROGRAM} />
                            <p>{"Pre-screened referrals enroll at a far higher rate."}</p>
                        </div>
                    </div>
                    <div class="stats-grid">
                        <div class="stat-tile">
                            <span class="stat-value">{"3x"}</span>
                            <span class="stat-label">{"Higher enrollment"}</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{"50%"}</span>
                            <span class="stat-label">{"Fewer screen failures"}</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-value">{"1"}</span>
                            <span class="stat-label">{"Dedicated project manager per study"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id={common::CONTACT_ANCHOR} class="contact-section">
                <div class="section-inner">
                    <h2>{"Ready to Accelerate Your Recruitment?"}</h2>
                    <p class="section-lead">
                        {"Get a personalized proposal tailored to your study and its challenges."}
                    </p>
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
                                    role={capture.role().unwrap_or(Role::Sponsor)}
                                    submitting={capture.is_submitting()}
                                    error={capture.error().map(String::from)}
                                    on_submit={on_submit.clone()}
                                />
                            }
                        } else if capture.shows_call_to_action() {
                            html! {
                                <div class="contact-cta">
                                    <button class="cta-button" onclick={open_role_modal.clone()}>
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
                    .sponsor-landing {
                        color: #2b3650;
                    }

                    .sponsor-landing h2 {
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

                    .hero {
                        background: linear-gradient(135deg, #0B1220, #10224E);
                        padding: 6rem 1.5rem;
                        text-align: center;
                    }

                    .hero-content {
                        max-width: 820px;
                        margin: 0 auto;
                    }

                    .hero h1 {
                        font-size: 3rem;
                        line-height: 1.15;
                        color: #E8EEFC;
                        margin: 0 0 2rem 0;
                    }

                    .hero-points {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem 0;
                        text-align: left;
                        display: inline-block;
                    }

                    .hero-points li {
                        color: #A4B0CC;
                        font-size: 1.1rem;
                        padding: 0.4rem 0 0.4rem 1.5rem;
                        position: relative;
                    }

                    .hero-points li::before {
                        content: '•';
                        position: absolute;
                        left: 0.25rem;
                        color: #56F0C8;
                    }

                    .hero-badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                        margin-bottom: 2.5rem;
                    }

                    .badge {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        font-size: 0.85rem;
                        font-weight: 600;
                    }

                    .badge-teal { background: #56F0C8; color: #0B1220; }
                    .badge-blue { background: #16B1F0; color: #ffffff; }
                    .badge-navy { background: #10224E; color: #E8EEFC; }

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

                    .value-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .value-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }

                    .value-card {
                        background: linear-gradient(160deg, #10224E, #0B1220);
                        border-radius: 14px;
                        padding: 1.75rem;
                        text-align: center;
                    }

                    .value-card h3 {
                        color: #E8EEFC;
                        font-size: 1.15rem;
                        margin: 0 0 0.6rem 0;
                    }

                    .value-card p {
                        color: #A4B0CC;
                        margin: 0;
                        font-size: 0.95rem;
                    }

                    .compare-section {
                        padding: 5rem 0;
                        background: #f1f5f9;
                    }

                    .compare-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }

                    .compare-card {
                        background: #ffffff;
                        border-radius: 14px;
                        padding: 2rem;
                        box-shadow: 0 4px 16px rgba(11, 18, 32, 0.08);
                    }

                    .compare-bad { border: 1px solid rgba(220, 38, 38, 0.35); }
                    .compare-good { border: 1px solid rgba(16, 185, 129, 0.35); }

                    .compare-bad h3 { color: #b91c1c; margin-top: 0; }
                    .compare-good h3 { color: #0f766e; margin-top: 0; }

                    .compare-result {
                        font-weight: 700;
                        margin-bottom: 0;
                    }

                    .services-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .service-card {
                        background: linear-gradient(160deg, rgba(86, 240, 200, 0.08), rgba(22, 177, 240, 0.08));
                        border: 1px solid rgba(86, 240, 200, 0.25);
                        border-radius: 14px;
                        padding: 1.75rem;
                    }

                    .service-card h3 {
                        color: #0B1220;
                        margin: 0 0 0.75rem 0;
                    }

                    .service-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .service-card li {
                        color: #10224E;
                        padding: 0.3rem 0 0.3rem 1.4rem;
                        position: relative;
                    }

                    .service-card li::before {
                        content: '✓';
                        position: absolute;
                        left: 0;
                        color: #16B1F0;
                    }

                    .results-section {
                        padding: 5rem 0;
                        background: #f1f5f9;
                    }

                    .results-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2.5rem;
                        margin-bottom: 3rem;
                    }

                    .result-column {
                        text-align: center;
                    }

                    .result-column h3 {
                        color: #0B1220;
                        margin: 0 0 1rem 0;
                    }

                    .result-column p {
                        color: #5a6782;
                    }

                    .outcome-chart {
                        display: flex;
                        justify-content: center;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        text-align: center;
                    }

                    .stat-tile {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                    }

                    .stat-value {
                        font-size: 2.5rem;
                        font-weight: 800;
                        color: #0f766e;
                    }

                    .stat-label {
                        font-size: 1.05rem;
                        font-weight: 600;
                        color: #0B1220;
                    }

                    .contact-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }

                    .contact-cta {
                        text-align: center;
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
                        .hero h1 {
                            font-size: 2.1rem;
                        }

                        .sponsor-landing h2 {
                            font-size: 1.75rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
