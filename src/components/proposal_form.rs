use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use gloo_console::log;
use crate::config;
use crate::state::role_handoff::Role;

/// Payload of a proposal request as sent to the backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProposalRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub organization_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_details: Option<String>,
    pub requested_at: i64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Sends the proposal request. Returns a user-displayable message on
/// failure so the caller can reopen the form with it.
pub async fn submit_proposal(request: &ProposalRequest) -> Result<(), String> {
    let builder = Request::post(&format!("{}/api/proposals", config::get_backend_url()))
        .json(request)
        .map_err(|e| {
            log!("Failed to encode proposal request:", e.to_string());
            "Something went wrong preparing your request. Please try again.".to_string()
        })?;

    match builder.send().await {
        Ok(response) => {
            if response.ok() {
                Ok(())
            } else {
                log!("Proposal request rejected with status:", response.status());
                match response.json::<ErrorResponse>().await {
                    Ok(error_response) => Err(error_response.error),
                    Err(_) => Err("We couldn't submit your request. Please try again.".to_string()),
                }
            }
        }
        Err(e) => {
            log!("Proposal request failed:", e.to_string());
            Err("We couldn't reach the server. Please check your connection and try again.".to_string())
        }
    }
}

fn form_heading(role: Role) -> &'static str {
    match role {
        Role::Sponsor => "Request Your Proposal",
        Role::Cro => "CRO Proposal Request",
        Role::Site => "Site / Vendor Proposal Request",
    }
}

fn form_subheading(role: Role) -> &'static str {
    match role {
        Role::Site => "Tell us about your site and we'll create a customized proposal",
        _ => "Tell us about your study and we'll create a customized proposal",
    }
}

fn organization_label(role: Role) -> &'static str {
    match role {
        Role::Site => "Site / Organization",
        _ => "Company / Organization",
    }
}

#[derive(Properties, PartialEq)]
pub struct ProposalFormProps {
    pub role: Role,
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<ProposalRequest>,
}

#[function_component(ProposalForm)]
pub fn proposal_form(props: &ProposalFormProps) -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let organization = use_state(String::new);
    let organization_type = use_state(|| props.role.as_param().to_string());
    let study_details = use_state(String::new);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let organization = organization.clone();
        let organization_type = organization_type.clone();
        let study_details = study_details.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let details = (*study_details).trim().to_string();
            on_submit.emit(ProposalRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                organization: (*organization).clone(),
                organization_type: (*organization_type).clone(),
                study_details: if details.is_empty() { None } else { Some(details) },
                requested_at: chrono::Utc::now().timestamp(),
            });
        })
    };

    html! {
        <div class="proposal-form-card">
            <div class="proposal-form-header">
                <h3>{form_heading(props.role)}</h3>
                <p>{form_subheading(props.role)}</p>
            </div>
            {
                if let Some(error_message) = props.error.as_ref() {
                    html! {
                        <div class="form-error">
                            {error_message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="first-name">{"First Name"}</label>
                        <input
                            type="text"
                            id="first-name"
                            placeholder="Enter your first name"
                            required=true
                            disabled={props.submitting}
                            onchange={let first_name = first_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                first_name.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label for="last-name">{"Last Name"}</label>
                        <input
                            type="text"
                            id="last-name"
                            placeholder="Enter your last name"
                            required=true
                            disabled={props.submitting}
                            onchange={let last_name = last_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                last_name.set(input.value());
                            }}
                        />
                    </div>
                </div>
                <div class="form-field">
                    <label for="email">{"Company Email"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="name@company.com"
                        required=true
                        disabled={props.submitting}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="phone">{"Phone Number"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="(555) 123-4567"
                        required=true
                        disabled={props.submitting}
                        onchange={let phone = phone.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="organization">{organization_label(props.role)}</label>
                    <input
                        type="text"
                        id="organization"
                        placeholder="Your organization name"
                        required=true
                        disabled={props.submitting}
                        onchange={let organization = organization.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            organization.set(input.value());
                        }}
                    />
                </div>
                {
                    if props.role != Role::Site {
                        html! {
                            <div class="form-field">
                                <label for="organization-type">{"Organization Type"}</label>
                                <select
                                    id="organization-type"
                                    disabled={props.submitting}
                                    onchange={let organization_type = organization_type.clone(); move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        organization_type.set(select.value());
                                    }}
                                >
                                    <option value="sponsor" selected={*organization_type == "sponsor"}>{"Pharmaceutical / Biotech Sponsor"}</option>
                                    <option value="cro" selected={*organization_type == "cro"}>{"Contract Research Organization (CRO)"}</option>
                                    <option value="device" selected={*organization_type == "device"}>{"Medical Device Manufacturer"}</option>
                                    <option value="other" selected={*organization_type == "other"}>{"Other"}</option>
                                </select>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="form-field">
                    <label for="study-details">{"Study Details (Optional)"}</label>
                    <textarea
                        id="study-details"
                        rows="4"
                        placeholder="Tell us about your study, timeline, or specific requirements..."
                        disabled={props.submitting}
                        onchange={let study_details = study_details.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            study_details.set(input.value());
                        }}
                    />
                </div>
                <button type="submit" class="form-submit" disabled={props.submitting}>
                    {if props.submitting { "Submitting..." } else { "Request My Proposal" }}
                </button>
            </form>
            <style>
                {r#"
                    .proposal-form-card {
                        background: #ffffff;
                        border-radius: 16px;
                        box-shadow: 0 8px 32px rgba(11, 18, 32, 0.12);
                        padding: 2.5rem;
                        max-width: 640px;
                        margin: 0 auto;
                    }

                    .proposal-form-header {
                        text-align: center;
                        margin-bottom: 2rem;
                    }

                    .proposal-form-header h3 {
                        font-size: 1.5rem;
                        color: #0B1220;
                        margin: 0 0 0.5rem 0;
                    }

                    .proposal-form-header p {
                        color: #5a6782;
                        margin: 0;
                    }

                    .form-error {
                        background: rgba(220, 38, 38, 0.08);
                        border: 1px solid rgba(220, 38, 38, 0.3);
                        border-radius: 8px;
                        color: #b91c1c;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1.5rem;
                        text-align: center;
                    }

                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }

                    .form-field {
                        margin-bottom: 1.25rem;
                    }

                    .form-field label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 600;
                        color: #2b3650;
                        margin-bottom: 0.4rem;
                    }

                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font-size: 1rem;
                        font-family: inherit;
                        box-sizing: border-box;
                    }

                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #16B1F0;
                        box-shadow: 0 0 0 2px rgba(22, 177, 240, 0.2);
                    }

                    .form-field input:disabled,
                    .form-field select:disabled,
                    .form-field textarea:disabled {
                        background: #f1f5f9;
                        color: #94a3b8;
                        cursor: not-allowed;
                    }

                    .form-submit {
                        width: 100%;
                        background: #16B1F0;
                        color: #ffffff;
                        font-size: 1.1rem;
                        font-weight: 700;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }

                    .form-submit:hover {
                        background: #10224E;
                    }

                    .form-submit:disabled {
                        background: #A4B0CC;
                        color: #10224E;
                        cursor: not-allowed;
                    }

                    @media (max-width: 640px) {
                        .proposal-form-card {
                            padding: 1.5rem;
                        }

                        .form-row {
                            grid-template-columns: 1fr;
                            gap: 0;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
