use leptos::prelude::*;
use stage::sections::SectionId;

#[component]
pub fn HomeSection(on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <div class="section section--home">
            <div class="section__decoration section__decoration--top-left" aria-hidden="true"></div>
            <div class="section__decoration section__decoration--bottom-right" aria-hidden="true"></div>
            <div class="home">
                <h1 class="home__heading">"Creating Digital Experiences That Matter"</h1>
                <p class="home__subtitle">
                    "We build custom web solutions that combine cutting-edge technology with beautiful design to help your business thrive in the digital world."
                </p>
                <div class="home__cta">
                    <button class="button button--primary" on:click=move |_| on_navigate.run(SectionId::Services)>
                        "Explore Services"
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_navigate.run(SectionId::Contact)>
                        "Get in Touch"
                    </button>
                </div>
            </div>
        </div>
    }
}
