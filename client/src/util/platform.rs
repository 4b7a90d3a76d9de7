//! Install-hint detection.
//!
//! iOS Safari has no install prompt, so the app shows its own "Add to Home
//! Screen" hint there, unless it is already running as an installed app.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

/// `true` for iPhone, iPad and iPod user agents.
///
/// Windows Phone's IE also advertises "iPhone" and is excluded.
pub fn is_ios_user_agent(user_agent: &str) -> bool {
    let ios = ["iPad", "iPhone", "iPod"].iter().any(|d| user_agent.contains(d));
    ios && !user_agent.contains("IEMobile") && !user_agent.contains("Windows Phone")
}

pub fn should_show_install_hint(user_agent: &str, standalone: bool) -> bool {
    !standalone && is_ios_user_agent(user_agent)
}

/// Check the running browser.
pub fn install_hint_needed() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let standalone = window
            .match_media("(display-mode: standalone)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        should_show_install_hint(&user_agent, standalone)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
