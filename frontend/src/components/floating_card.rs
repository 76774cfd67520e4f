use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::pointer::{card_tilt, element_rect, normalise_in_rect};

#[derive(Clone, Copy, PartialEq, Default)]
pub enum GlowColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

impl GlowColor {
    /// Cycles through the palette for grid positions.
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => GlowColor::Blue,
            1 => GlowColor::Purple,
            2 => GlowColor::Green,
            _ => GlowColor::Orange,
        }
    }

    fn rgba(&self) -> &'static str {
        match self {
            GlowColor::Blue => "rgba(59, 130, 246, 0.3)",
            GlowColor::Purple => "rgba(147, 51, 234, 0.3)",
            GlowColor::Green => "rgba(34, 197, 94, 0.3)",
            GlowColor::Orange => "rgba(251, 146, 60, 0.3)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub glow: GlowColor,
    #[prop_or(1.0)]
    pub float_intensity: f64,
    pub dark_mode: bool,
}

#[function_component]
pub fn FloatingCard(props: &FloatingCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(|| (0.0_f64, 0.0_f64));
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<HtmlElement>() {
                let (nx, ny) = normalise_in_rect(
                    (e.client_x() as f64, e.client_y() as f64),
                    element_rect(&card),
                );
                tilt.set(card_tilt(nx, ny));
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set((0.0, 0.0));
            hovered.set(false);
        })
    };

    let (rotate_x, rotate_y) = *tilt;
    let lift = if *hovered { -10.0 * props.float_intensity } else { 0.0 };
    let glow = props.glow.rgba();
    let shadow = if *hovered {
        format!("0 25px 50px -12px {glow}, 0 0 0 1px {glow}")
    } else {
        "0 10px 25px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)".to_string()
    };

    html! {
        <div
            ref={node}
            class={classes!("floating-card", hovered.then_some("floating-card-hovered"), props.class.clone())}
            style={format!("transform: translateY({lift}px); --float-amplitude: {}px;", -5.0 * props.float_intensity)}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="floating-card-bob">
                <div
                    class={classes!("floating-card-body", props.dark_mode.then_some("floating-card-dark"))}
                    style={format!(
                        "transform: rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg); box-shadow: {shadow};"
                    )}
                >
                    <div class="floating-card-shimmer"></div>
                    <div class="floating-card-content">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
            <div
                class="floating-card-glow"
                style={format!("background: radial-gradient(circle, {glow}, transparent 70%);")}
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_cycles_every_four_cards() {
        assert!(GlowColor::for_index(0) == GlowColor::Blue);
        assert!(GlowColor::for_index(3) == GlowColor::Orange);
        assert!(GlowColor::for_index(5) == GlowColor::Purple);
    }
}
