use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MorphingShapesProps {
    pub dark_mode: bool,
}

/// Blurred background blobs animated by CSS keyframes.
#[function_component]
pub fn MorphingShapes(props: &MorphingShapesProps) -> Html {
    let tone = if props.dark_mode { "shape-dark" } else { "shape-light" };
    html! {
        <div class="morphing-shapes" aria-hidden="true">
            <div class={classes!("shape", "shape-one", tone)}></div>
            <div class={classes!("shape", "shape-two", tone)}></div>
            <div class={classes!("shape", "shape-three", tone)}></div>
        </div>
    }
}
