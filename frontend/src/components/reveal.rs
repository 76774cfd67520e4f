use yew::prelude::*;

use crate::config::SECTION_THRESHOLD;
use crate::motion::visibility::{use_reveal, RevealOptions};

#[derive(Clone, Copy, PartialEq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Fade,
}

impl RevealDirection {
    fn class(&self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Down => "reveal-down",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
            RevealDirection::Fade => "reveal-fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: RevealDirection,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(crate::config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

/// Fades and nudges its children into place once they scroll into view.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(
        node.clone(),
        RevealOptions {
            threshold: props.threshold,
            once: props.once,
        },
    );

    let state = if visible {
        "reveal-visible"
    } else {
        props.direction.class()
    };

    html! {
        <div
            ref={node}
            class={classes!("reveal", state, props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SectionAnimation {
    Fade,
    #[default]
    SlideUp,
    SlideLeft,
    SlideRight,
    Scale,
}

impl SectionAnimation {
    fn class(&self) -> &'static str {
        match self {
            SectionAnimation::Fade => "anim-fade",
            SectionAnimation::SlideUp => "anim-slide-up",
            SectionAnimation::SlideLeft => "anim-slide-left",
            SectionAnimation::SlideRight => "anim-slide-right",
            SectionAnimation::Scale => "anim-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: SectionAnimation,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
}

/// Section-sized reveal with a longer, eased transition.
#[function_component]
pub fn AnimatedSection(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::with_threshold(SECTION_THRESHOLD));

    let style = format!(
        "transition-duration: {}s; transition-delay: {}s;",
        props.duration, props.delay
    );

    html! {
        <section
            ref={node}
            class={classes!(
                "anim-section",
                props.animation.class(),
                visible.then_some("anim-visible"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_directions_map_to_distinct_classes() {
        let classes = [
            RevealDirection::Up.class(),
            RevealDirection::Down.class(),
            RevealDirection::Left.class(),
            RevealDirection::Right.class(),
            RevealDirection::Fade.class(),
        ];
        assert_eq!(RevealDirection::default().class(), "reveal-up");
        assert_eq!(classes[1], "reveal-down");
        for (i, a) in classes.iter().enumerate() {
            assert!(classes[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn section_slides_cover_both_sides() {
        assert_eq!(SectionAnimation::default().class(), "anim-slide-up");
        assert_eq!(SectionAnimation::SlideLeft.class(), "anim-slide-left");
        assert_eq!(SectionAnimation::SlideRight.class(), "anim-slide-right");
    }
}
