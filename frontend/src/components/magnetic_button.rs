use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::pointer::{element_rect, magnetic_offset};

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub size: ButtonSize,
}

/// Button that leans toward the cursor while hovered.
#[function_component]
pub fn MagneticButton(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0_f64, 0.0_f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = node.cast::<HtmlElement>() {
                let (left, top, width, height) = element_rect(&button);
                let dx = e.client_x() as f64 - (left + width / 2.0);
                let dy = e.client_y() as f64 - (top + height / 2.0);
                offset.set(magnetic_offset(dx, dy));
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| {
            offset.set((0.0, 0.0));
            hovered.set(false);
        })
    };
    let onclick = props.onclick.clone();

    let size = match props.size {
        ButtonSize::Md => "mbtn-md",
        ButtonSize::Lg => "mbtn-lg",
    };
    let (x, y) = *offset;
    let scale = if *hovered { 1.05 } else { 1.0 };

    html! {
        <button
            ref={node}
            class={classes!("mbtn", "mbtn-primary", size, hovered.then_some("mbtn-hovered"), props.class.clone())}
            style={format!("transform: translate({:.2}px, {:.2}px) scale({});", x, y, scale)}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <span class="mbtn-shine"></span>
            <span class="mbtn-label">{ for props.children.iter() }</span>
        </button>
    }
}
