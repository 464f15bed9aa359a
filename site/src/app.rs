//! Application shell: document metadata plus the page layout.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, Script, Title};

use lore_seo::{OpenGraphCard, RobotsDirectives, SiteMeta, StructuredData, TwitterCard};

use crate::sections::{Hero, WaitlistForm};

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <PageHead/>
        <main class="landing">
            <div class="glow glow-top"></div>
            <div class="glow glow-bottom"></div>
            <div class="landing-content">
                <Hero/>
                <WaitlistForm/>
                <footer class="landing-footer">
                    <p>"Join the waitlist for early access."</p>
                </footer>
            </div>
        </main>
    }
}

/// Head declarations for the page shell. Configuration, not logic.
#[component]
fn PageHead() -> impl IntoView {
    let meta = SiteMeta::default();
    let og = OpenGraphCard::default();
    let twitter = TwitterCard::default();
    let robots = RobotsDirectives::default();
    let json_ld = StructuredData::web_site().to_script_json();

    view! {
        <Title text=meta.page_title("")/>
        <Meta name="description" content=meta.description.clone()/>
        <Meta name="keywords" content=meta.keywords_content()/>
        <Meta name="application-name" content=meta.site_name.clone()/>
        <Meta name="author" content=meta.authors_content()/>
        <Meta name="creator" content=meta.creator.clone()/>
        <Meta name="publisher" content=meta.publisher.clone()/>
        <Meta name="theme-color" content=meta.theme_color.clone()/>
        <Meta name="color-scheme" content="dark"/>
        <Meta name="robots" content=robots.content()/>
        <Meta name="googlebot" content=robots.googlebot_content()/>
        <Meta property="og:type" content=og.kind/>
        <Meta property="og:locale" content=og.locale/>
        <Meta property="og:url" content=og.url/>
        <Meta property="og:title" content=og.title/>
        <Meta property="og:description" content=og.description/>
        <Meta property="og:site_name" content=og.site_name/>
        <Meta name="twitter:card" content=twitter.card/>
        <Meta name="twitter:title" content=twitter.title/>
        <Meta name="twitter:description" content=twitter.description/>
        <Link rel="canonical" href=meta.canonical_url.clone()/>
        <Link rel="manifest" href="/manifest.webmanifest"/>
        <Script id="json-ld" type_="application/ld+json">{json_ld}</Script>
    }
}
