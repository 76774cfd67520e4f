use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::parallax_hero::ParallaxHero;
use crate::components::reveal::{AnimatedSection, Reveal, SectionAnimation};
use crate::Route;

static VALUE_PROPS: [(&str, &str, &str); 4] = [
    ("fa-award", "ISO Certified", "Quality management systems certified to international standards"),
    ("fa-users", "Expert Team", "Highly skilled professionals with decades of experience"),
    ("fa-globe", "Global Reach", "Serving clients across multiple continents"),
    ("fa-shield-halved", "Reliable Solutions", "Proven technology backed by comprehensive support"),
];

static FEATURED_INDUSTRIES: [(&str, &str); 3] = [
    ("Pharmaceutical", "https://images.pexels.com/photos/3825517/pexels-photo-3825517.jpeg?auto=compress&cs=tinysrgb&w=800"),
    ("Biotechnology", "https://images.pexels.com/photos/2280547/pexels-photo-2280547.jpeg?auto=compress&cs=tinysrgb&w=800"),
    ("Healthcare", "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=800"),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let dark_mode = props.dark_mode;

    html! {
        <div class={classes!("page", "home-page", dark_mode.then_some("page-dark"))}>
            <ParallaxHero {dark_mode} />

            <AnimatedSection class="section">
                <div class="container grid grid-4">
                    {
                        for VALUE_PROPS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <Reveal class="card value-card" delay_ms={index as u32 * 100}>
                                <div class="icon-badge"><i class={classes!("fas", *icon)}></i></div>
                                <h3>{*title}</h3>
                                <p class="muted">{*description}</p>
                            </Reveal>
                        })
                    }
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-alt" animation={SectionAnimation::Fade}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Industries We Serve"}</h2>
                        <p class="lead">{"Delivering specialized solutions across diverse sectors"}</p>
                    </div>
                    <div class="grid grid-3">
                        {
                            for FEATURED_INDUSTRIES.iter().map(|(title, image)| html! {
                                <Link<Route> to={Route::Industries} classes="industry-tile">
                                    <LazyImage src={*image} alt={*title} class="industry-tile-image" />
                                    <div class="industry-tile-overlay">
                                        <h3>{*title}</h3>
                                    </div>
                                </Link<Route>>
                            })
                        }
                    </div>
                    <div class="center">
                        <Link<Route> to={Route::Industries} classes="btn btn-primary">
                            <span>{"View All Industries"}</span>
                            <i class="fas fa-arrow-right"></i>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section" animation={SectionAnimation::Scale}>
                <div class="container section-heading">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p class="lead">{"Contact us today to discuss your purification system requirements"}</p>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary btn-large">
                        <span>{"Contact Us"}</span>
                        <i class="fas fa-arrow-right"></i>
                    </Link<Route>>
                </div>
            </AnimatedSection>
        </div>
    }
}
