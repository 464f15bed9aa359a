//! Hero section: brand badge, heading, subtitle.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <span class="brand-badge">"The Meme Lore"</span>
            <h1 class="hero-heading">"The Archive" <br/> "Opens Soon"</h1>
            <p class="hero-subtitle">
                "We are curating the most comprehensive library of internet culture. \
                 Be the first to explore the history, meaning, and evolution of memes."
            </p>
        </div>
    }
}
