use yew::prelude::*;
use log::error;

use crate::carousel::expand::TestimonialData;
use crate::components::{
    anchors::{use_smooth_anchor_scroll, CtaButton},
    floating::{BackToTop, StickyBookButton},
    header::SiteHeader,
    reveal::Reveal,
    testimonials::TestimonialSlider,
};
use crate::forms::{contact::ContactForm, newsletter::NewsletterForm};
use crate::video::player::HeroVideo;

const TESTIMONIALS_JSON: &str = include_str!("../../data/testimonials.json");

pub fn load_testimonials() -> TestimonialData {
    TestimonialData::from_json(TESTIMONIALS_JSON).unwrap_or_else(|e| {
        error!("Failed to parse testimonials: {}", e);
        TestimonialData::default()
    })
}

struct Course {
    title: &'static str,
    summary: &'static str,
}

const COURSES: &[Course] = &[
    Course {
        title: "Individuel coaching",
        summary: "Et forløb tilpasset dig, hvor vi arbejder med balance, grænser og ro i hverdagen.",
    },
    Course {
        title: "Stresshåndtering",
        summary: "Praktiske værktøjer til at genkende og håndtere stress, før den tager over.",
    },
    Course {
        title: "Parterapi",
        summary: "Et trygt rum for åben dialog og nye måder at lytte til hinanden på.",
    },
];

const CONTROL_POINTS: &[&str] = &[
    "Første samtale",
    "Fælles mål",
    "Værktøjer i hverdagen",
    "Opfølgning",
];

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    title: AttrValue,
    summary: AttrValue,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let touched = use_state(|| false);

    let on_touch_start = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| touched.set(true))
    };
    let on_touch_end = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| touched.set(false))
    };

    html! {
        <a href="#kontakt"
            class={classes!("course-card", (*touched).then(|| "touch-hover"))}
            ontouchstart={on_touch_start} ontouchend={on_touch_end}>
            <h3>{&props.title}</h3>
            <p>{&props.summary}</p>
        </a>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_smooth_anchor_scroll();
    let testimonials = use_memo(|_| load_testimonials(), ());

    html! {
        <div id="top" class="coaching-page">
            <SiteHeader />

            <section class="hero">
                <Reveal class="fade-in hero-content">
                    <h1 class="hero-title">{"Find roen og balancen igen"}</h1>
                    <p class="hero-subtitle">
                        {"Coaching og terapi for dig, der vil håndtere stress og skabe mere nærvær i hverdagen."}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton href="#kontakt" class="accent-button">{"Book en samtale"}</CtaButton>
                        <CtaButton class="outline-button">{"Læs om tilgangen"}</CtaButton>
                    </div>
                </Reveal>
                <HeroVideo src="/assets/hero.mp4" poster="/assets/hero-poster.jpg" />
            </section>

            <section id="forloeb" class="courses-section">
                <Reveal class="fade-in section-title"><h2>{"Forløb"}</h2></Reveal>
                <div class="courses-grid">
                    { for COURSES.iter().map(|course| html! {
                        <CourseCard title={course.title} summary={course.summary} />
                    }) }
                </div>
            </section>

            <section id="om-mig" class="approach-section">
                <Reveal class="fade-in section-title"><h2>{"Sådan arbejder vi"}</h2></Reveal>
                <div class="control-points">
                    { for CONTROL_POINTS.iter().enumerate().map(|(index, point)| html! {
                        <Reveal class="control-point" stagger={index}>
                            <span class="control-point-number">{(index + 1).to_string()}</span>
                            <p>{*point}</p>
                        </Reveal>
                    }) }
                </div>
                <CtaButton class="consultation-button">{"Book gratis afklaringssamtale"}</CtaButton>
            </section>

            <section id="udtalelser" class="testimonials-section">
                <Reveal class="fade-in section-title"><h2>{"Det siger mine klienter"}</h2></Reveal>
                <TestimonialSlider data={testimonials.clone()} />
            </section>

            <section id="kontakt" class="contact-section">
                <Reveal class="fade-in section-title"><h2>{"Kontakt"}</h2></Reveal>
                <ContactForm />
            </section>

            <footer class="site-footer">
                <div class="footer-top">
                    <h3>{"Nyhedsbrev"}</h3>
                    <p>{"Få inspiration til ro og balance direkte i din indbakke."}</p>
                    <NewsletterForm />
                </div>
                <div class="footer-bottom">
                    <p>{"© Inger Coaching"}</p>
                </div>
            </footer>

            <StickyBookButton />
            <BackToTop />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_testimonials_load() {
        let data = load_testimonials();
        assert_eq!(data.cards.len(), 4);
        assert!(data.full_text_for("Kim Rasmussen").is_some());
    }
}
