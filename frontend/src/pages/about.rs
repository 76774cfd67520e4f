use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal::{Reveal, RevealDirection};

static CERTIFICATIONS: [&str; 6] = [
    "ISO 9001:2015 - Quality Management",
    "ISO 14001:2015 - Environmental Management",
    "ISO 45001:2018 - Occupational Health & Safety",
    "CE Certification",
    "cGMP Compliance",
    "FDA Guidelines Adherence",
];

static STATS: [(&str, &str, &str); 4] = [
    ("25+", "Experience", "Decades of industry expertise"),
    ("100+", "Innovation", "Cutting-edge technology solutions"),
    ("99.9%", "Quality", "Uncompromising standards"),
    ("24/7", "Support", "24/7 technical assistance"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn About(props: &AboutProps) -> Html {
    html! {
        <div class={classes!("page", "about-page", props.dark_mode.then_some("page-dark"))}>
            <section class="section section-alt">
                <div class="container">
                    <Reveal class="section-heading" direction={RevealDirection::Up}>
                        <h1>{"About BIOSPN HiPurity Systems"}</h1>
                        <p class="lead">{"Your trusted partner in advanced water purification and treatment solutions"}</p>
                    </Reveal>

                    <div class="grid grid-2 align-center">
                        <Reveal direction={RevealDirection::Left}>
                            <LazyImage
                                src="https://images.pexels.com/photos/3825574/pexels-photo-3825574.jpeg?auto=compress&cs=tinysrgb&w=1200"
                                alt="Laboratory"
                                class="rounded shadow"
                            />
                        </Reveal>
                        <Reveal direction={RevealDirection::Right} delay_ms={150}>
                            <h2>{"Company Overview"}</h2>
                            <p class="muted">
                                {"BIOSPN HiPurity Systems is a leading manufacturer and supplier of advanced water purification systems \
                                  designed for critical applications in pharmaceutical, biotechnology, healthcare, and research industries."}
                            </p>
                            <p class="muted">
                                {"With decades of combined expertise, our team delivers cutting-edge solutions that meet the most stringent \
                                  international standards and regulatory requirements. We specialize in designing, manufacturing, and \
                                  maintaining high-purity water systems that ensure reliability, efficiency, and compliance."}
                            </p>
                            <p class="muted">
                                {"Our commitment to innovation and quality has made us the preferred choice for organizations seeking \
                                  dependable purification technology backed by comprehensive technical support and service excellence."}
                            </p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container grid grid-2">
                    <Reveal class="card tinted-card">
                        <div class="card-title-row">
                            <div class="icon-tile"><i class="fas fa-bullseye"></i></div>
                            <h3>{"Our Mission"}</h3>
                        </div>
                        <p>
                            {"To provide innovative, reliable, and sustainable water purification solutions that enable our clients \
                              to achieve operational excellence while maintaining the highest standards of quality and safety."}
                        </p>
                    </Reveal>
                    <Reveal class="card tinted-card" delay_ms={100}>
                        <div class="card-title-row">
                            <div class="icon-tile"><i class="fas fa-eye"></i></div>
                            <h3>{"Our Vision"}</h3>
                        </div>
                        <p>
                            {"To be the global leader in high-purity water systems, recognized for technological innovation, \
                              customer satisfaction, and our contribution to advancing healthcare and scientific research worldwide."}
                        </p>
                    </Reveal>
                </div>
            </section>

            <section class="section section-alt">
                <div class="container">
                    <div class="section-heading">
                        <div class="icon-badge"><i class="fas fa-award"></i></div>
                        <h2>{"Certifications & Standards"}</h2>
                        <p class="lead">{"Committed to excellence through certified quality systems"}</p>
                    </div>
                    <div class="grid grid-3">
                        {
                            for CERTIFICATIONS.iter().enumerate().map(|(index, cert)| html! {
                                <Reveal class="card cert-card" delay_ms={(index % 3) as u32 * 80}>
                                    <i class="fas fa-circle-check cert-icon"></i>
                                    <span>{*cert}</span>
                                </Reveal>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="center">{"Why Choose BIOSPN?"}</h2>
                    <div class="grid grid-4">
                        {
                            for STATS.iter().map(|(figure, title, desc)| html! {
                                <Reveal class="center" direction={RevealDirection::Fade}>
                                    <div class="stat-figure">{*figure}</div>
                                    <h3>{*title}</h3>
                                    <p class="muted">{*desc}</p>
                                </Reveal>
                            })
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}
