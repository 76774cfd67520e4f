use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(250)]
    pub fade_duration_ms: u32,
}

#[function_component]
pub fn LazyImage(props: &LazyImageProps) -> Html {
    let loaded = use_state(|| false);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            decoding="async"
            {onload}
            class={classes!(
                "lazy-image",
                if *loaded { "lazy-image-loaded" } else { "lazy-image-pending" },
                props.class.clone()
            )}
            style={format!("transition-duration: {}ms;", props.fade_duration_ms)}
        />
    }
}
