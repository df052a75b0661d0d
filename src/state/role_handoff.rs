use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Category of visitor requesting a proposal. Sponsors and CROs are served
/// by the sponsor landing page; sites and vendors have their own page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sponsor,
    Cro,
    Site,
}

impl Role {
    pub fn as_param(&self) -> &'static str {
        match self {
            Role::Sponsor => "sponsor",
            Role::Cro => "cro",
            Role::Site => "site",
        }
    }

    pub fn from_param(value: &str) -> Option<Role> {
        match value {
            "sponsor" => Some(Role::Sponsor),
            "cro" => Some(Role::Cro),
            "site" => Some(Role::Site),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Sponsor => "Sponsor",
            Role::Cro => "CRO",
            Role::Site => "Site / Vendor",
        }
    }
}

/// Query carried along a cross-page navigation when a role selection
/// belongs to a different landing page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleQuery {
    pub role: Role,
}

/// Name of the handoff query parameter.
pub const ROLE_PARAM: &str = "role";

/// Interprets the handoff parameter as read by the destination page.
/// An absent or unparseable value is the normal "no role chosen" case.
pub fn consume(param: Option<&str>) -> Option<Role> {
    param.and_then(Role::from_param)
}

/// Rewrites the current URL without its query string so the handoff cannot
/// be replayed by a reload or back-navigation.
pub fn clear_param() {
    if let Some(window) = web_sys::window() {
        if let Ok(path) = window.location().pathname() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod role {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn param_round_trips_for_every_role() {
            for role in [Role::Sponsor, Role::Cro, Role::Site] {
                assert_eq!(Role::from_param(role.as_param()), Some(role));
            }
        }

        #[test]
        fn unknown_params_parse_to_none() {
            assert_eq!(Role::from_param(""), None);
            assert_eq!(Role::from_param("vendor"), None);
            assert_eq!(Role::from_param("SITE"), None);
        }

        #[test]
        fn serializes_to_its_param_form() {
            let json = serde_json::to_string(&Role::Site).unwrap();
            assert_eq!(json, "\"site\"");
        }
    }

    mod handoff {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn carried_role_is_consumed() {
            assert_eq!(consume(Some("site")), Some(Role::Site));
            assert_eq!(consume(Some("cro")), Some(Role::Cro));
        }

        #[test]
        fn second_read_without_a_new_write_yields_nothing() {
            // After the first read the URL is rewritten without the query,
            // so the destination sees no parameter on any later read.
            let first = consume(Some("site"));
            let second = consume(None);
            assert_eq!(first, Some(Role::Site));
            assert_eq!(second, None);
        }

        #[test]
        fn junk_left_in_the_url_opens_nothing() {
            assert_eq!(consume(Some("admin")), None);
        }
    }
}
