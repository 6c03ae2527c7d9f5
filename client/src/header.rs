use leptos::prelude::*;

use aomgg_shared::nav::{DESKTOP_LINKS, KOFI_URL, MOBILE_LINKS, MenuState, NavLink, SOCIAL_LINKS};

use crate::config;

const HAMBURGER_SVG: &str = r#"<svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/></svg>"#;
const CLOSE_SVG: &str = r#"<svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/></svg>"#;
const DISCORD_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 15 15" fill="#2563eb" xmlns="http://www.w3.org/2000/svg"><path d="M5.075 1.826a.48.48 0 0 0-.127-.003c-.841.091-2.121.545-2.877.955a.48.48 0 0 0-.132.106c-.314.359-.599.944-.822 1.498C.887 4.95.697 5.55.59 5.984.236 7.394.043 9.087.017 10.693a.48.48 0 0 0 .056.23c.3.573.947 1.032 1.59 1.356.67.34 1.462.6 2.088.698a.48.48 0 0 0 .456-.186l.71-.973a.48.48 0 0 0-.028-.607c1.647.5 3.615.5 5.262 0a.48.48 0 0 0-.028.607l.71.973a.48.48 0 0 0 .456.186c.626-.098 1.418-.358 2.088-.698.643-.324 1.29-.783 1.59-1.356a.48.48 0 0 0 .056-.23c-.026-1.606-.22-3.3-.573-4.71a12.3 12.3 0 0 0-.504-1.602c-.223-.554-.508-1.14-.822-1.498a.48.48 0 0 0-.132-.106c-.756-.41-2.036-.864-2.877-.955a.48.48 0 0 0-.503.33l-.2.624a11.6 11.6 0 0 0-2.844 0l-.2-.624a.48.48 0 0 0-.376-.327z"/></svg>"##;
const TWITCH_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="#a855f7" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" xmlns="http://www.w3.org/2000/svg"><path d="M21 2H3v16h5v4l4-4h5l4-4V2zm-10 9V7m5 4V7"/></svg>"##;

const LINK_STYLE: &str = "color: #e2e0d8; text-decoration: none; font-size: 1.5rem; font-weight: 500; line-height: 1.1; text-align: center;";

/// Icon markup for an outbound social link.
fn social_icon(link: &NavLink) -> &'static str {
    match link.label {
        "Discord" => DISCORD_SVG,
        "Twitch" => TWITCH_SVG,
        _ => "",
    }
}

fn social_link(link: NavLink, kofi_src: &'static str, kofi_width: u32) -> impl IntoView {
    let body = if link.href == KOFI_URL {
        view! { <img src=kofi_src width=kofi_width.to_string() alt=link.label /> }.into_any()
    } else {
        view! { <span class="social-icon" inner_html=social_icon(&link) /> }.into_any()
    };
    view! {
        <a href=link.href target=link.target() rel=link.rel() aria-label=link.label style="display: flex; align-items: center;">
            {body}
        </a>
    }
}

/// Site header: logo, desktop navigation, and a slide-in menu on narrow screens.
#[component]
pub fn Header() -> impl IntoView {
    let menu: RwSignal<MenuState> = RwSignal::new(MenuState::default());
    let close_menu = move |_: web_sys::MouseEvent| menu.update(MenuState::close);

    let desktop_links = DESKTOP_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a class="nav-link" href=link.href style=LINK_STYLE>{link.label}</a>
                <div class="nav-separator" />
            }
        })
        .collect::<Vec<_>>();

    let desktop_social = SOCIAL_LINKS
        .into_iter()
        .map(|link| social_link(link, config::KOFI_BUTTON_SRC, 200))
        .collect::<Vec<_>>();

    let mobile_links = MOBILE_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a class="nav-link" href=link.href style=LINK_STYLE on:click=close_menu>{link.label}</a>
            }
        })
        .collect::<Vec<_>>();

    let mobile_social = SOCIAL_LINKS
        .into_iter()
        .map(|link| social_link(link, config::KOFI_TAG_SRC, 100))
        .collect::<Vec<_>>();

    view! {
        <header style="padding: 16px; display: flex; justify-content: space-between; align-items: center;">
            <div style="display: flex; align-items: center; gap: 16px;">
                <a href="/" class="nav-link">
                    <img src=config::LOGO_SRC width="175" alt="AoM.gg" />
                </a>
                <nav class="wide-only" style="align-items: center; gap: 16px;">
                    {desktop_links}
                    {desktop_social}
                </nav>
            </div>

            <button
                class="narrow-only menu-button"
                aria-label="Open menu"
                inner_html=HAMBURGER_SVG
                on:click=move |_| menu.update(MenuState::toggle)
            />
            // Sign-in lives with the auth flow; keep its slot so the layout matches.
            <div class="wide-only" id="sign-in-slot" />

            <div
                class="mobile-nav"
                style:pointer-events=move || if menu.get().is_open() { "auto" } else { "none" }
                style:transform=move || menu.get().panel_translate()
            >
                <div
                    class="mobile-nav-backdrop"
                    style:opacity=move || if menu.get().is_open() { "0.5" } else { "0" }
                    on:click=close_menu
                />
                <div class="mobile-nav-panel">
                    <button
                        class="menu-button"
                        style="align-self: flex-end; padding: 16px;"
                        aria-label="Close menu"
                        inner_html=CLOSE_SVG
                        on:click=close_menu
                    />
                    <nav style="display: flex; flex-direction: column; gap: 16px; padding: 24px;">
                        {mobile_links}
                        {mobile_social}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_social_link_has_a_visual() {
        for link in SOCIAL_LINKS {
            assert!(link.href == KOFI_URL || !social_icon(&link).is_empty(), "{}", link.label);
        }
    }
}
