use leptos::prelude::*;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <div class="section section--portfolio">
            <h2 class="section__title">"Portfolio"</h2>
            <div class="section__content">
                <p>
                    "Explore our collection of successful projects that showcase our expertise in web development. Each project is a testament to our commitment to quality, creativity, and client satisfaction."
                </p>
                <p>
                    "From e-commerce stores to corporate websites, our portfolio demonstrates our ability to deliver exceptional digital experiences across various industries and business domains."
                </p>
                <button class="button button--primary">"View More Projects"</button>
            </div>
        </div>
    }
}
