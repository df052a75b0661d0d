use yew::prelude::*;
use crate::state::role_handoff::Role;

#[derive(Properties, PartialEq)]
pub struct RoleModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_select: Callback<Role>,
}

/// Dialog asking the visitor which kind of organization they represent so
/// the right proposal form (and page) can be opened.
#[function_component(RoleSelectionModal)]
pub fn role_selection_modal(props: &RoleModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let select = |role: Role| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(role))
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_dialog_click}>
                <button class="modal-close" onclick={close}>{"✕"}</button>
                <h3>{"Which best describes you?"}</h3>
                <p class="modal-subtitle">{"We'll tailor your proposal to your role in the study."}</p>
                <div class="modal-roles">
                    <button class="role-option" onclick={select(Role::Sponsor)}>
                        <span class="role-name">{Role::Sponsor.label()}</span>
                        <span class="role-description">{"Pharmaceutical, biotech, or device company running a study"}</span>
                    </button>
                    <button class="role-option" onclick={select(Role::Cro)}>
                        <span class="role-name">{Role::Cro.label()}</span>
                        <span class="role-description">{"Contract research organization managing trials for sponsors"}</span>
                    </button>
                    <button class="role-option" onclick={select(Role::Site)}>
                        <span class="role-name">{Role::Site.label()}</span>
                        <span class="role-description">{"Research site or vendor looking for recruitment support"}</span>
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(11, 18, 32, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        padding: 1rem;
                    }

                    .modal-content {
                        position: relative;
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 2.5rem;
                        width: 100%;
                        max-width: 480px;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                        text-align: center;
                    }

                    .modal-content h3 {
                        font-size: 1.5rem;
                        color: #0B1220;
                        margin: 0 0 0.5rem 0;
                    }

                    .modal-subtitle {
                        color: #5a6782;
                        margin: 0 0 1.5rem 0;
                    }

                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: transparent;
                        border: none;
                        font-size: 1rem;
                        color: #5a6782;
                        cursor: pointer;
                    }

                    .modal-roles {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .role-option {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        text-align: left;
                        background: #f8fafc;
                        border: 1px solid #cbd5e1;
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .role-option:hover {
                        border-color: #16B1F0;
                        background: rgba(22, 177, 240, 0.06);
                    }

                    .role-name {
                        font-size: 1.05rem;
                        font-weight: 700;
                        color: #10224E;
                    }

                    .role-description {
                        font-size: 0.9rem;
                        color: #5a6782;
                    }
                "#}
            </style>
        </div>
    }
}
