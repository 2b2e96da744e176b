//! Predefined notification templates and request resolution.
//!
//! The template table is a compile-time constant. Resolution turns a type key
//! (plus optional overrides for the `custom` type) into the request payload.

use crate::errors::ResolutionError;
use crate::models::notification::{NotificationRequest, NotificationTemplate};

/// Type key that takes its title, body and url from the command line.
pub const CUSTOM_TYPE: &str = "custom";

/// Url used by `custom` notifications when none is given.
pub const DEFAULT_URL: &str = "/dashboard";

const TEMPLATES: [NotificationTemplate; 5] = [
    NotificationTemplate {
        key: "morning",
        title: "💪 Bom dia, atleta!",
        body: "Hora de começar o dia com energia! Vamos treinar hoje?",
        url: "/dashboard",
    },
    NotificationTemplate {
        key: "workout",
        title: "🏋️ Hora do Treino!",
        body: "Seu treino está te esperando. Vamos nessa!",
        url: "/dashboard/training",
    },
    NotificationTemplate {
        key: "hydration",
        title: "💧 Hidratação",
        body: "Já bebeu água hoje? Mantenha-se hidratado!",
        url: "/dashboard/nutrition",
    },
    NotificationTemplate {
        key: "evening",
        title: "🌙 Boa Noite!",
        body: "Descanse bem para conquistar seus objetivos amanhã!",
        url: "/dashboard/motivational",
    },
    NotificationTemplate {
        key: "test",
        title: "🧪 Teste YM Sports",
        body: "Notificação de teste via Python funcionando perfeitamente! ✅",
        url: "/dashboard",
    },
];

/// Overrides accepted on the command line. Only honoured for `custom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub url: Option<&'a str>,
}

/// All templates, in display order.
pub fn all() -> &'static [NotificationTemplate] {
    &TEMPLATES
}

/// Looks up a template by its exact key.
pub fn find(key: &str) -> Option<&'static NotificationTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Builds the request for `notification_type`.
///
/// For `custom`, title and body must be present and non-empty; the url falls
/// back to [`DEFAULT_URL`]. For any other type the template is used verbatim
/// and the overrides are ignored.
///
/// # Arguments
/// * `user_id` - Recipient, copied into the request as-is
/// * `notification_type` - Template key or `custom`
/// * `overrides` - Title, body and url given on the command line
///
/// # Errors
/// - [`ResolutionError::MissingField`] when a `custom` title or body is missing
/// - [`ResolutionError::UnknownType`] when the type is not in the table
pub fn resolve(
    user_id: &str,
    notification_type: &str,
    overrides: Overrides<'_>,
) -> Result<NotificationRequest, ResolutionError> {
    if notification_type == CUSTOM_TYPE {
        let title =
            non_empty(overrides.title).ok_or(ResolutionError::MissingField { field: "title" })?;
        let body =
            non_empty(overrides.body).ok_or(ResolutionError::MissingField { field: "body" })?;
        let url = non_empty(overrides.url).unwrap_or(DEFAULT_URL);

        return Ok(NotificationRequest {
            user_id: user_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            url: url.to_string(),
        });
    }

    find(notification_type)
        .map(|template| NotificationRequest::from_template(user_id, template))
        .ok_or_else(|| ResolutionError::UnknownType(notification_type.to_string()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "45610e6d-f5f5-4540-912d-a5c9a361e20f";

    #[test]
    fn every_template_resolves_verbatim_ignoring_overrides() {
        let overrides = Overrides {
            title: Some("ignored title"),
            body: Some("ignored body"),
            url: Some("/ignored"),
        };

        for template in all() {
            let request = resolve(USER, template.key, overrides).unwrap();
            assert_eq!(request, NotificationRequest::from_template(USER, template));
            assert_eq!(request.user_id, USER);
        }
    }

    #[test]
    fn table_keys_are_unique_and_never_custom() {
        let keys: Vec<_> = all().iter().map(|t| t.key).collect();
        assert_eq!(keys, ["morning", "workout", "hydration", "evening", "test"]);
        assert!(find(CUSTOM_TYPE).is_none());
    }

    #[test]
    fn custom_uses_overrides_and_defaults_url() {
        let request = resolve(
            USER,
            "custom",
            Overrides {
                title: Some("🎉 Parabéns"),
                body: Some("Você é incrível!"),
                url: None,
            },
        )
        .unwrap();

        assert_eq!(request.title, "🎉 Parabéns");
        assert_eq!(request.body, "Você é incrível!");
        assert_eq!(request.url, "/dashboard");
    }

    #[test]
    fn custom_keeps_explicit_url() {
        let request = resolve(
            USER,
            "custom",
            Overrides {
                title: Some("t"),
                body: Some("b"),
                url: Some("/dashboard/training"),
            },
        )
        .unwrap();

        assert_eq!(request.url, "/dashboard/training");
    }

    #[test]
    fn custom_without_title_or_body_is_missing_field() {
        let no_title = Overrides {
            body: Some("b"),
            ..Default::default()
        };
        assert_eq!(
            resolve(USER, "custom", no_title),
            Err(ResolutionError::MissingField { field: "title" })
        );

        let empty_body = Overrides {
            title: Some("t"),
            body: Some(""),
            url: None,
        };
        assert_eq!(
            resolve(USER, "custom", empty_body),
            Err(ResolutionError::MissingField { field: "body" })
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            resolve(USER, "Workout", Overrides::default()),
            Err(ResolutionError::UnknownType("Workout".to_string()))
        );
    }
}
