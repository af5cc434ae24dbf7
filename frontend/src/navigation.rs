use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll_target::set_pending_scroll_target;
use crate::Route;

/// How long the home page waits after mounting before it scrolls, so the
/// sections have been laid out.
pub const SCROLL_SETTLE_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    /// `#id` selector of a section on the home page.
    Section(&'static str),
    Page(Route),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", target: NavTarget::Section("#services") },
    NavLink { label: "Methodology", target: NavTarget::Section("#methodology") },
    NavLink { label: "Team", target: NavTarget::Section("#team") },
    NavLink { label: "Results", target: NavTarget::Section("#results") },
    NavLink { label: "Contact", target: NavTarget::Page(Route::Contact) },
];

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    /// Section is on the current page.
    ScrollNow(&'static str),
    /// Remember the section, then go home and let the home page scroll.
    ScrollAfterNavigate(&'static str),
    Navigate(Route),
}

pub fn resolve_nav_action(target: &NavTarget, on_home: bool) -> NavAction {
    match target {
        NavTarget::Section(selector) if on_home => NavAction::ScrollNow(selector),
        NavTarget::Section(selector) => NavAction::ScrollAfterNavigate(selector),
        NavTarget::Page(route) => NavAction::Navigate(route.clone()),
    }
}

/// Runs the DOM side of a nav action. Returns the route to push, if any;
/// pending scroll targets are written before that route change happens.
pub fn perform_nav_action(action: NavAction) -> Option<Route> {
    match action {
        NavAction::ScrollNow(selector) => {
            scroll_to_section(selector);
            None
        }
        NavAction::ScrollAfterNavigate(selector) => {
            set_pending_scroll_target(selector);
            Some(Route::Home)
        }
        NavAction::Navigate(route) => Some(route),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MountAction {
    Scroll(String),
    /// No request is pending but the URL still carries a `#fragment`.
    StripFragment,
    Nothing,
}

/// What the home page does when it mounts or its location changes, given
/// the target it just took from the store and the current URL hash.
pub fn home_mount_action(pending: Option<String>, hash: &str) -> MountAction {
    match pending {
        Some(target) => MountAction::Scroll(target),
        None if !hash.is_empty() => MountAction::StripFragment,
        None => MountAction::Nothing,
    }
}

pub fn scroll_to_section(selector: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section matches {}", selector),
    }
}

/// Drops a leftover `#fragment` from the address bar without scrolling.
pub fn strip_stale_fragment() {
    let Some(window) = window() else { return };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    let result = window.history().and_then(|history| {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("{}{}", path, search)))
    });
    if let Err(e) = result {
        log::warn!("Could not clear the URL fragment: {:?}", e);
    }
}

pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_link_on_home_scrolls_in_place() {
        assert_eq!(
            resolve_nav_action(&NavTarget::Section("#services"), true),
            NavAction::ScrollNow("#services")
        );
    }

    #[test]
    fn section_link_elsewhere_goes_home_first() {
        assert_eq!(
            resolve_nav_action(&NavTarget::Section("#team"), false),
            NavAction::ScrollAfterNavigate("#team")
        );
    }

    #[test]
    fn page_links_always_navigate() {
        for on_home in [true, false] {
            assert_eq!(
                resolve_nav_action(&NavTarget::Page(Route::Contact), on_home),
                NavAction::Navigate(Route::Contact)
            );
        }
    }

    #[test]
    fn navigating_home_for_a_section_leaves_it_pending() {
        let route = perform_nav_action(NavAction::ScrollAfterNavigate("#methodology"));
        assert_eq!(route, Some(Route::Home));
        assert_eq!(
            crate::scroll_target::consume_pending_scroll_target().as_deref(),
            Some("#methodology")
        );
    }

    #[test]
    fn plain_navigation_leaves_no_pending_target() {
        assert_eq!(perform_nav_action(NavAction::Navigate(Route::Contact)), Some(Route::Contact));
        assert_eq!(crate::scroll_target::consume_pending_scroll_target(), None);
    }

    #[test]
    fn mount_with_a_pending_target_scrolls_and_keeps_the_url() {
        assert_eq!(
            home_mount_action(Some("#services".to_string()), "#team"),
            MountAction::Scroll("#services".to_string())
        );
        assert_eq!(
            home_mount_action(Some("#services".to_string()), ""),
            MountAction::Scroll("#services".to_string())
        );
    }

    #[test]
    fn mount_without_a_target_only_strips_a_fragment() {
        assert_eq!(home_mount_action(None, "#results"), MountAction::StripFragment);
        assert_eq!(home_mount_action(None, ""), MountAction::Nothing);
    }

    #[test]
    fn a_pending_target_serves_one_mount() {
        crate::scroll_target::set_pending_scroll_target("#results");
        let first = home_mount_action(crate::scroll_target::consume_pending_scroll_target(), "");
        let second = home_mount_action(crate::scroll_target::consume_pending_scroll_target(), "");
        assert_eq!(first, MountAction::Scroll("#results".to_string()));
        assert_eq!(second, MountAction::Nothing);
    }

    #[test]
    fn every_section_link_is_an_id_selector() {
        for link in NAV_LINKS {
            if let NavTarget::Section(selector) = link.target {
                assert!(selector.starts_with('#'), "{} is not an id selector", selector);
            }
        }
    }
}
