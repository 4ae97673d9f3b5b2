//! Horizontal section carousel with dots, arrows, wheel and swipe input.
//!
//! DESIGN
//! ======
//! The track is one flex row of `slot_count` panels, each a full viewport
//! wide, translated by `Carousel::track_offset_percent`. In loop mode the
//! engine adds a clone panel at each end; after the silent snap it turns
//! animation off for exactly one frame, which here becomes
//! `transition: none` on the track.

use leptos::prelude::*;
use stage::input::NavInput;
use stage::nav::NavTarget;
use stage::sections::SectionId;

use crate::components::sections;
use crate::state::site::{ClientSite, SiteHandle};
use crate::util::input;

const EASING: &str = "cubic-bezier(0.65, 0, 0.35, 1)";

#[component]
pub fn Carousel() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let slots = site.with(|s| s.carousel().slots());
    let count = slots.len();
    let transition_ms = site.with(|s| s.carousel().transition_ms());

    let track_style = move || {
        site.with(|s| {
            let carousel = s.carousel();
            let transition = if carousel.animates() {
                format!("transform {transition_ms}ms {EASING}")
            } else {
                "none".to_owned()
            };
            format!(
                "width: calc(100% * {count}); transform: translateX(-{:.4}%); transition: {transition}",
                carousel.track_offset_percent()
            )
        })
    };

    let on_navigate = Callback::new(move |id: SectionId| {
        site.dispatch(|s, now| s.go_to(NavTarget::Section(id), now));
    });

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        let delta = input::wheel_event_delta(&ev);
        if site.peek(ClientSite::captures_wheel).unwrap_or(false) {
            ev.prevent_default();
        }
        site.dispatch(|s, now| s.wheel(delta, now));
    };
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = input::first_touch_x(&ev) {
            site.dispatch_silent(|s| s.touch_start(x));
        }
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = input::first_touch_x(&ev) {
            site.dispatch_silent(|s| s.touch_move(x));
        }
    };

    view! {
        <main
            class="carousel"
            on:wheel=on_wheel
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=move |_| {
                site.dispatch(|s, now| s.touch_end(now));
            }
            on:touchcancel=move |_| {
                site.dispatch_silent(|s| s.touch_cancel());
            }
        >
            <div class="carousel__track" style=track_style>
                {slots
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <section
                                class="carousel__slot"
                                class:carousel__slot--clone=slot.is_clone
                                style=format!("width: calc(100% / {count})")
                                data-section=slot.id.as_str()
                                data-slot=slot.key()
                                aria-hidden=slot.is_clone.to_string()
                            >
                                {sections::render(slot.id, on_navigate)}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
            <CarouselArrows/>
            <SectionDots/>
        </main>
    }
}

/// Previous/next buttons; disabled at the ends in clamp mode.
#[component]
fn CarouselArrows() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let step = move |input: NavInput| {
        site.dispatch(|s, now| s.navigate(input, now));
    };

    view! {
        <button
            class="carousel__arrow carousel__arrow--prev"
            aria-label="Previous section"
            disabled=move || site.with(|s| s.carousel().at_start())
            on:click=move |_| step(NavInput::Previous)
        >
            "‹"
        </button>
        <button
            class="carousel__arrow carousel__arrow--next"
            aria-label="Next section"
            disabled=move || site.with(|s| s.carousel().at_end())
            on:click=move |_| step(NavInput::Next)
        >
            "›"
        </button>
    }
}

/// One dot per real section.
#[component]
fn SectionDots() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let ids = site.with(|s| s.carousel().sections().to_vec());
    let active = Memo::new(move |_| site.with(|s| s.active_section()));

    view! {
        <nav class="section-dots" aria-label="Sections">
            {ids
                .into_iter()
                .map(|id| {
                    let is_active = move || active.get() == id;
                    view! {
                        <button
                            class="section-dots__dot"
                            class:section-dots__dot--active=is_active
                            title=id.title()
                            aria-label=id.title()
                            aria-current=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| {
                                site.dispatch(|s, now| s.go_to(NavTarget::Section(id), now));
                            }
                        ></button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
