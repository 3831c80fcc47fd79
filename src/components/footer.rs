//! Site footer with catalog links.

use leptos::prelude::*;

/// Static footer shown under every page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__column">
                <span class="footer__brand">"EdCourse"</span>
                <p class="footer__tagline">
                    "Expert-led courses across every domain."
                </p>
            </div>
            <nav class="footer__column">
                <a href="/explore">"Explore courses"</a>
                <a href="/categories">"Categories"</a>
                <a href="/signup">"Create an account"</a>
            </nav>
            <p class="footer__copyright">"© 2025 EdCourse"</p>
        </footer>
    }
}
