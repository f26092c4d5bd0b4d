use tracing::{debug, warn};

use super::messages::Message;
use super::{LocaleGate, LocaleResolution};
use crate::effects::Effect;
use crate::routing;
use lumina_model::Locale;

pub fn update_locale(gate: &mut LocaleGate, message: Message) -> Vec<Effect> {
    match message {
        Message::PathChanged { path } => handle_path_changed(gate, &path),
        Message::LanguageActivated(locale) => {
            handle_language_activated(gate, locale)
        }
    }
}

fn handle_path_changed(gate: &mut LocaleGate, path: &str) -> Vec<Effect> {
    let Some((segment, rest)) = routing::split_locale(path) else {
        // Root path bypasses the gate entirely; the shell issues the
        // redirect via `routing::root_redirect`.
        gate.resolution = LocaleResolution::Unresolved;
        return Vec::new();
    };

    let Some(requested) = Locale::from_path_segment(segment) else {
        // Segment outside the supported set: re-anchor the same path under
        // the default locale instead of stalling on the placeholder.
        let target = if rest.is_empty() {
            format!("/{}", gate.default_locale)
        } else {
            format!("/{}/{rest}", gate.default_locale)
        };
        warn!(segment, %target, "unsupported locale segment, redirecting");
        gate.resolution = LocaleResolution::Unresolved;
        return vec![Effect::Navigate {
            path: target,
            replace: true,
        }];
    };

    if gate.active_language == Some(requested) {
        gate.resolution = LocaleResolution::Ready(requested);
        return Vec::new();
    }

    debug!(%requested, "locale mismatch, requesting language change");
    gate.resolution = LocaleResolution::Loading { requested };
    vec![Effect::ChangeLanguage(requested)]
}

fn handle_language_activated(
    gate: &mut LocaleGate,
    locale: Locale,
) -> Vec<Effect> {
    gate.active_language = Some(locale);
    match gate.resolution {
        LocaleResolution::Loading { requested } if requested == locale => {
            gate.resolution = LocaleResolution::Ready(locale);
        }
        LocaleResolution::Loading { requested } => {
            // An older change resolved after a newer request; keep waiting
            // for the one we asked for.
            debug!(%locale, %requested, "stale language activation ignored");
        }
        LocaleResolution::Ready(current) if current != locale => {
            // The language diverged under a resolved path (e.g. another tab
            // switched it); children must unmount until it is pulled back.
            debug!(%locale, %current, "active language diverged from path");
            gate.resolution = LocaleResolution::Loading { requested: current };
            return vec![Effect::ChangeLanguage(current)];
        }
        _ => {}
    }
    Vec::new()
}
