use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <div class="section section--contact">
            <h2 class="section__title">"Contact Us"</h2>
            <div class="section__content">
                <p>
                    "Have a project in mind? We'd love to hear from you! Reach out to us using the contact information below or fill out the form, and we'll get back to you as soon as possible."
                </p>
                <div class="contact__form">
                    <h3>"Contact Form"</h3>
                    <div class="contact__placeholder">
                        <p>"Contact Form Placeholder"</p>
                    </div>
                </div>
                <button class="button button--primary">"Send Message"</button>
            </div>
        </div>
    }
}
