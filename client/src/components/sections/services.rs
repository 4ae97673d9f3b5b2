use leptos::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Custom Website Development",
        description: "Professional, responsive websites tailored to your specific business needs and brand identity.",
        features: ["Responsive design for all devices", "SEO-friendly structure", "Custom functionality", "Performance optimization"],
    },
    Service {
        title: "E-commerce Solutions",
        description: "Powerful online stores with secure payment gateways and intuitive product management systems.",
        features: ["Secure payment processing", "Inventory management", "Customer accounts", "Order tracking"],
    },
    Service {
        title: "Single Page Applications",
        description: "Fast, dynamic web applications with seamless user experiences and minimal page reloads.",
        features: ["Reactive UI development", "State management", "API integration", "Interactive UIs"],
    },
    Service {
        title: "Progressive Web Apps",
        description: "Web applications that offer native app-like experiences with offline capabilities and high performance.",
        features: ["Offline functionality", "App-like experience", "Push notifications", "Home screen installation"],
    },
    Service {
        title: "Web Optimization",
        description: "Performance tuning to make your existing websites faster, more efficient, and mobile-friendly.",
        features: ["Page speed improvements", "Mobile responsiveness", "Code optimization", "Core Web Vitals tuning"],
    },
    Service {
        title: "UI/UX Design",
        description: "User-centered design that enhances usability and creates intuitive interfaces for your web projects.",
        features: ["User research", "Wireframing", "Prototyping", "User testing"],
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <div class="section section--services">
            <h2 class="section__title">"Services"</h2>
            <div class="services">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="services__card">
                                <h3 class="services__title">{service.title}</h3>
                                <p class="services__description">{service.description}</p>
                                <ul class="services__features">
                                    {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
