//! Static route table and path construction.
//!
//! Every in-app path except the root redirect carries exactly one locale as
//! its first segment. Routes are partitioned once, at build time, into three
//! layout groups; pages never inspect which group they are in.

use url::form_urlencoded;
use uuid::Uuid;

use crate::effects::Effect;
use lumina_model::{DesignId, ListingFilter, Locale, UserId};

/// Layout shells the route table is partitioned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    /// Shared header/footer/menu chrome
    PublicShell,
    /// Full-screen forms, no chrome
    AuthFlow,
    /// Sidebar plus mobile drawer, behind the access gate
    DashboardShell,
}

/// Every navigable page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Explore,
    Plans,
    DesignDetail(DesignId),
    PublicProfile(UserId),
    Login,
    CompleteProfile,
    Dashboard,
    MyDesigns,
    AddDesign,
    EditDesign(DesignId),
    Inbox,
    Settings,
}

impl Route {
    /// The fixed build-time partition of the route table
    pub fn group(&self) -> RouteGroup {
        use Route::*;
        match self {
            Landing | Explore | Plans | DesignDetail(_) | PublicProfile(_) => {
                RouteGroup::PublicShell
            }
            Login | CompleteProfile => RouteGroup::AuthFlow,
            Dashboard | MyDesigns | AddDesign | EditDesign(_) | Inbox
            | Settings => RouteGroup::DashboardShell,
        }
    }

    /// Whether the route sits behind the access gate
    pub fn requires_auth(&self) -> bool {
        self.group() == RouteGroup::DashboardShell
    }

    /// Canonical path under a locale
    pub fn path(&self, locale: Locale) -> String {
        use Route::*;
        let tail = match self {
            Landing => String::new(),
            Explore => "/explorar".to_string(),
            Plans => "/planes".to_string(),
            DesignDetail(id) => format!("/diseno/{id}"),
            PublicProfile(id) => format!("/perfil/{id}"),
            Login => "/login".to_string(),
            CompleteProfile => "/complete-profile".to_string(),
            Dashboard => "/dashboard".to_string(),
            MyDesigns => "/mis-disenos".to_string(),
            AddDesign => "/add-design".to_string(),
            EditDesign(id) => format!("/edit-design/{id}"),
            Inbox => "/mensajes".to_string(),
            Settings => "/configuracion".to_string(),
        };
        format!("/{locale}{tail}")
    }
}

/// Outcome of matching a raw path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatch {
    /// The bare root path; redirect-only, never renders content
    Root,
    /// A localized path. The locale segment is reported raw; validating it
    /// against the supported set is the locale gate's job.
    Localized {
        locale_segment: String,
        route: Option<Route>,
    },
}

/// Split a path into its first segment and the localized remainder.
pub fn split_locale(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once('/') {
        Some((first, rest)) => Some((first, rest)),
        None => Some((trimmed, "")),
    }
}

/// Match a raw path (no query string) against the route table.
pub fn parse_path(path: &str) -> PathMatch {
    let Some((locale_segment, rest)) = split_locale(path) else {
        return PathMatch::Root;
    };
    PathMatch::Localized {
        locale_segment: locale_segment.to_string(),
        route: match_route(rest),
    }
}

fn match_route(rest: &str) -> Option<Route> {
    let segments: Vec<&str> =
        rest.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Some(Route::Landing),
        ["explorar"] => Some(Route::Explore),
        ["planes"] => Some(Route::Plans),
        ["diseno", id] => parse_uuid(id).map(|u| Route::DesignDetail(DesignId(u))),
        ["perfil", id] => parse_uuid(id).map(|u| Route::PublicProfile(UserId(u))),
        ["login"] => Some(Route::Login),
        ["complete-profile"] => Some(Route::CompleteProfile),
        ["dashboard"] => Some(Route::Dashboard),
        ["mis-disenos"] => Some(Route::MyDesigns),
        ["add-design"] => Some(Route::AddDesign),
        ["edit-design", id] => parse_uuid(id).map(|u| Route::EditDesign(DesignId(u))),
        ["mensajes"] => Some(Route::Inbox),
        ["configuracion"] => Some(Route::Settings),
        _ => None,
    }
}

fn parse_uuid(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Explore path carrying a filter's canonical query string.
pub fn explore_path(locale: Locale, filter: &ListingFilter) -> String {
    let base = Route::Explore.path(locale);
    let pairs = filter.to_query_pairs();
    if pairs.is_empty() {
        return base;
    }
    let query: String = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{base}?{query}")
}

pub fn login_path(locale: Locale) -> String {
    Route::Login.path(locale)
}

pub fn complete_profile_path(locale: Locale) -> String {
    Route::CompleteProfile.path(locale)
}

/// Root redirect for `/`.
///
/// Matches the visitor's detected language by primary subtag, falls back to
/// the configured default, and always replaces the history entry so the
/// bare root is never reachable through back navigation.
pub fn root_redirect(
    detected_language: Option<&str>,
    default_locale: Locale,
) -> Effect {
    let locale = detected_language
        .and_then(Locale::from_language_tag)
        .unwrap_or(default_locale);
    Effect::Navigate {
        path: format!("/{locale}"),
        replace: true,
    }
}
