use leptos::prelude::*;
use stage::sections::SectionId;

#[component]
pub fn AboutSection(on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <div class="section section--about">
            <h2 class="section__title">"About Me"</h2>
            <div class="about">
                <div class="about__bio">
                    <p>
                        "My journey into web development began in 2017 with Python, while I was organizing global e-Crime congresses, an experience that instilled a deep understanding of digital trust and security. Since then, I've worked for industry leaders like Veracode and Pentera in cybersecurity, as well as RapidMiner in data science."
                    </p>
                    <p>
                        "I've also supported hundreds of aspiring professionals as a Mentor and Project Reviewer for Udacity's Data Analyst Nanodegree. Today, I build secure, reliable, and scalable cross-platform web apps with a strong focus on quality and user experience."
                    </p>
                    <p>
                        "Outside of work, I stay driven through personal data-driven projects and extreme triathlons like Patagonman, where discipline and endurance matter just as much as in tech."
                    </p>
                </div>
            </div>
            <div class="about__actions">
                <button class="button button--primary">"Download Resume"</button>
                <button class="button button--secondary" on:click=move |_| on_navigate.run(SectionId::Contact)>
                    "Contact Me"
                </button>
            </div>
        </div>
    }
}
