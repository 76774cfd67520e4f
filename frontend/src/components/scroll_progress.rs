use yew::prelude::*;

use crate::motion::scroll::{page_extent, scroll_progress, use_scroll_state};

const RING_RADIUS: f64 = 28.0;

/// Top bar plus a circular indicator of how far the page is scrolled.
#[function_component]
pub fn ScrollProgress() -> Html {
    let scroll = use_scroll_state();
    let (document_height, viewport_height) = page_extent();
    let progress = scroll_progress(scroll.offset_y, document_height, viewport_height);

    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let dash_offset = circumference * (1.0 - progress);

    html! {
        <>
            <div class="scroll-progress-bar" style={format!("transform: scaleX({:.4});", progress)}></div>
            <div class="scroll-progress-ring">
                <svg viewBox="0 0 64 64" width="64" height="64">
                    <defs>
                        <linearGradient id="scroll-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#3B82F6" />
                            <stop offset="50%" stop-color="#8B5CF6" />
                            <stop offset="100%" stop-color="#06B6D4" />
                        </linearGradient>
                    </defs>
                    <circle class="scroll-progress-track" cx="32" cy="32" r="28" fill="none" stroke-width="4" />
                    <circle
                        cx="32" cy="32" r="28" fill="none"
                        stroke="url(#scroll-gradient)" stroke-width="4" stroke-linecap="round"
                        stroke-dasharray={format!("{:.2}", circumference)}
                        stroke-dashoffset={format!("{:.2}", dash_offset)}
                        transform="rotate(-90 32 32)"
                    />
                </svg>
                <div class="scroll-progress-dot"></div>
            </div>
        </>
    }
}
