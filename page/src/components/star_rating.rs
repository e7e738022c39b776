//! Five-slot star rating

use super::STAR_PATH;
use crate::format::star_flags;
use leptos::prelude::*;

const STAR_COLOR: &str = "#f59e0b";

/// Row of five stars, filled from the left up to the rounded rating.
#[component]
pub fn StarRating(#[prop(default = 0.0)] rating: f64) -> impl IntoView {
    let label = format!("Rating: {} out of 5", rating);

    view! {
        <div class="star-rating" aria-label=label role="img">
            {star_flags(rating).into_iter().map(|filled| {
                let fill = if filled { STAR_COLOR } else { "none" };
                view! {
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill=fill
                        stroke=STAR_COLOR
                        class="star"
                        data-filled=filled.to_string()
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="1.5"
                            d=STAR_PATH
                        ></path>
                    </svg>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
