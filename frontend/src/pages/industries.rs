use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal::{AnimatedSection, Reveal, RevealDirection, SectionAnimation};
use crate::Route;

struct Industry {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    applications: [&'static str; 5],
    image: &'static str,
}

static INDUSTRIES: [Industry; 5] = [
    Industry {
        icon: "fa-flask",
        title: "Pharmaceutical",
        description: "High-purity water systems for drug manufacturing, formulation, and quality control processes.",
        applications: [
            "Active Pharmaceutical Ingredient (API) production",
            "Formulation and manufacturing",
            "Cleaning and sterilization",
            "Laboratory testing and analysis",
            "WFI (Water For Injection) generation",
        ],
        image: "https://images.pexels.com/photos/3825517/pexels-photo-3825517.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Industry {
        icon: "fa-vials",
        title: "Biotechnology",
        description: "Ultra-pure water for cell culture, fermentation, and biopharmaceutical production.",
        applications: [
            "Cell culture media preparation",
            "Fermentation processes",
            "Downstream processing",
            "Protein purification",
            "Bioreactor operations",
        ],
        image: "https://images.pexels.com/photos/2280547/pexels-photo-2280547.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Industry {
        icon: "fa-building",
        title: "Food & Beverage",
        description: "Purified water systems ensuring product quality, taste, and safety in food processing.",
        applications: [
            "Beverage production",
            "Food processing and cleaning",
            "Product ingredient water",
            "CIP (Clean-in-Place) systems",
            "Steam generation",
        ],
        image: "https://images.pexels.com/photos/4021808/pexels-photo-4021808.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Industry {
        icon: "fa-heart-pulse",
        title: "Healthcare",
        description: "Medical-grade water systems for hospitals, clinics, and diagnostic facilities.",
        applications: [
            "Dialysis water systems",
            "Surgical instrument cleaning",
            "Laboratory testing",
            "Sterilization processes",
            "Medical device manufacturing",
        ],
        image: "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    Industry {
        icon: "fa-microscope",
        title: "Research Labs",
        description: "Type I, II, and III water for analytical, clinical, and research applications.",
        applications: [
            "HPLC and chromatography",
            "Spectroscopy and analytical testing",
            "Cell culture and microbiology",
            "General laboratory use",
            "Quality control testing",
        ],
        image: "https://images.pexels.com/photos/2280568/pexels-photo-2280568.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];

static SOLUTIONS: [(&str, &str); 3] = [
    ("Compliance", "Meeting FDA, USP, EP, and other regulatory standards"),
    ("Validation", "Complete IQ/OQ/PQ documentation and support"),
    ("Service", "Preventive maintenance and 24/7 technical support"),
];

#[derive(Properties, PartialEq)]
pub struct IndustriesProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn Industries(props: &IndustriesProps) -> Html {
    html! {
        <div class={classes!("page", "industries-page", props.dark_mode.then_some("page-dark"))}>
            <section class="section section-alt">
                <div class="container">
                    <Reveal class="section-heading" direction={RevealDirection::Up}>
                        <h1>{"Industries We Serve"}</h1>
                        <p class="lead">
                            {"Delivering specialized purification solutions tailored to the unique requirements of diverse sectors"}
                        </p>
                    </Reveal>

                    <div class="industry-list">
                        {
                            for INDUSTRIES.iter().enumerate().map(|(index, industry)| {
                                // Alternate image/text sides down the page, sliding in from the image side.
                                let flipped = index % 2 == 1;
                                let animation = if flipped {
                                    SectionAnimation::SlideRight
                                } else {
                                    SectionAnimation::SlideLeft
                                };
                                html! {
                                    <AnimatedSection
                                        class={classes!("card", "industry-block", flipped.then_some("industry-block-flipped"))}
                                        {animation}
                                        duration={0.8}
                                    >
                                        <div class="industry-media">
                                            <LazyImage src={industry.image} alt={industry.title} class="industry-image" />
                                        </div>
                                        <div class="industry-body">
                                            <div class="card-title-row">
                                                <div class="icon-tile"><i class={classes!("fas", industry.icon)}></i></div>
                                                <h2>{industry.title}</h2>
                                            </div>
                                            <p class="muted">{industry.description}</p>
                                            <h3>{"Key Applications:"}</h3>
                                            <ul class="application-list">
                                                { for industry.applications.iter().map(|app| html! {
                                                    <li><span class="arrow">{"→"}</span><span>{*app}</span></li>
                                                }) }
                                            </ul>
                                        </div>
                                    </AnimatedSection>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container section-heading">
                    <h2>{"Industry-Specific Solutions"}</h2>
                    <p class="lead">
                        {"Our team understands the unique challenges and regulatory requirements of each industry. \
                          We provide customized solutions with full compliance documentation and validation support."}
                    </p>
                    <div class="grid grid-3">
                        {
                            for SOLUTIONS.iter().enumerate().map(|(index, (title, desc))| html! {
                                <Reveal class="card" delay_ms={index as u32 * 100}>
                                    <h3>{*title}</h3>
                                    <p class="muted">{*desc}</p>
                                </Reveal>
                            })
                        }
                    </div>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary btn-shine">
                        {"Discuss Your Requirements"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
