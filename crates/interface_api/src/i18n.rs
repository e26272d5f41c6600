//! Spanish message catalog
//!
//! All user-facing notification texts come from an embedded fluent
//! resource. The application ships a single `es` locale; the bundle lives
//! behind a mutex because fluent's memoizer is not `Sync`.

use std::sync::Mutex;

use fluent::{concurrent::FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use unic_langid::langid;

use crate::dto::Notification;

const CATALOG: &str = include_str!("../i18n/es.ftl");

static BUNDLE: Lazy<Mutex<FluentBundle<FluentResource>>> = Lazy::new(|| {
    let resource =
        FluentResource::try_new(CATALOG.to_string()).unwrap_or_else(|(resource, errors)| {
            tracing::warn!(?errors, "message catalog has parse errors");
            resource
        });

    let mut bundle = FluentBundle::new_concurrent(vec![langid!("es")]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(?errors, "message catalog has duplicate entries");
    }
    Mutex::new(bundle)
});

/// Resolves a message id to its localized text
///
/// Unknown ids fall back to the id itself so a missing entry is visible
/// instead of a hole in the UI.
pub fn message(id: &str) -> String {
    let bundle = BUNDLE.lock().unwrap_or_else(|e| e.into_inner());

    let Some(msg) = bundle.get_message(id) else {
        tracing::warn!(id, "unknown message id");
        return id.to_string();
    };
    let Some(pattern) = msg.value() else {
        return id.to_string();
    };

    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, None, &mut errors);
    if !errors.is_empty() {
        tracing::warn!(id, ?errors, "message formatting errors");
    }
    text.into_owned()
}

/// Builds a toast-style notification from two catalog ids
pub fn notification(title_id: &str, description_id: &str) -> Notification {
    Notification {
        title: message(title_id),
        description: message(description_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages_resolve() {
        assert_eq!(message("error-title"), "Error");
        assert_eq!(message("coming-soon-title"), "Próximamente");
        assert_eq!(
            message("quote-missing-fields"),
            "Por favor complete todos los campos"
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_id() {
        assert_eq!(message("no-such-entry"), "no-such-entry");
    }

    #[test]
    fn test_notification_pairs_title_and_description() {
        let n = notification("quote-generated-title", "quote-generated");
        assert_eq!(n.title, "Cotización Generada");
        assert_eq!(n.description, "Se ha calculado la tarifa del seguro");
    }
}
