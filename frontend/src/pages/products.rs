use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::products::{categories, filter_products, products, CategoryFilter};
use crate::components::floating_card::{FloatingCard, GlowColor};
use crate::components::lazy_image::LazyImage;
use crate::components::magnetic_button::{ButtonSize, MagneticButton};
use crate::components::morphing_shapes::MorphingShapes;
use crate::components::reveal::AnimatedSection;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn Products(props: &ProductsProps) -> Html {
    let selected = use_state(|| CategoryFilter::All);
    let catalog = products();
    let visible = filter_products(catalog, &selected);
    let dark_mode = props.dark_mode;

    let filter_button = |filter: CategoryFilter, label: String, index: usize| {
        let active = *selected == filter;
        let onclick = {
            let selected = selected.clone();
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| selected.set(filter.clone()))
        };
        html! {
            <button
                class={classes!("filter-button", active.then_some("filter-button-active"))}
                style={format!("animation-delay: {:.1}s;", 0.4 + index as f64 * 0.1)}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class={classes!("page", "products-page", dark_mode.then_some("page-dark"))}>
            <AnimatedSection class="section section-alt products-hero">
                <MorphingShapes {dark_mode} />
                <div class="container layered">
                    <div class="section-heading fade-in">
                        <h1>{"Our Products"}</h1>
                        <p class="lead">
                            {"Comprehensive range of high-purity water treatment systems designed for critical applications"}
                        </p>
                    </div>

                    <div class="filter-bar">
                        { filter_button(CategoryFilter::All, "All Products".to_string(), 0) }
                        {
                            for categories(catalog).into_iter().enumerate().map(|(index, category)| {
                                filter_button(CategoryFilter::from(category), category.to_string(), index)
                            })
                        }
                    </div>

                    <div class="grid grid-3 product-grid" key={selected.label().to_string()}>
                        {
                            for visible.iter().enumerate().map(|(index, product)| html! {
                                <FloatingCard
                                    key={product.id}
                                    glow={GlowColor::for_index(index)}
                                    float_intensity={0.6}
                                    class="product-card"
                                    {dark_mode}
                                >
                                    <div class="product-media">
                                        <LazyImage src={product.image} alt={product.name} class="product-image" />
                                        <span class="product-badge">{product.category}</span>
                                    </div>
                                    <div class="product-body">
                                        <h3>{product.name}</h3>
                                        <p class="muted">{product.description}</p>
                                        <h4 class="product-features-title">{"Key Features:"}</h4>
                                        <ul class="product-features">
                                            { for product.features.iter().map(|feature| html! {
                                                <li><span class="bullet">{"•"}</span>{*feature}</li>
                                            }) }
                                        </ul>
                                        <Link<Route> to={Route::Contact} classes="product-quote">
                                            <MagneticButton class="btn-block">{"Request Quote"}</MagneticButton>
                                        </Link<Route>>
                                    </div>
                                </FloatingCard>
                            })
                        }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section">
                <div class="container section-heading">
                    <h2>{"Need a Custom Solution?"}</h2>
                    <p class="lead">
                        {"Our engineering team can design and build tailored purification systems to meet your specific requirements"}
                    </p>
                    <Link<Route> to={Route::Contact}>
                        <MagneticButton size={ButtonSize::Lg}>{"Contact Our Engineers"}</MagneticButton>
                    </Link<Route>>
                </div>
            </AnimatedSection>
        </div>
    }
}
