//! Reviews section - client testimonials

use super::StarRating;
use crate::booking::REVIEWS_ANCHOR;
use crate::types::Review;
use leptos::prelude::*;

/// Placeholder shown when there are no testimonials.
pub const REVIEWS_PLACEHOLDER: &str =
    "No reviews available yet. Placeholder will render here until reviews are added.";

/// The `#reviews` section: testimonial cards, or a placeholder when empty.
#[component]
pub fn ReviewsSection(reviews: Vec<Review>) -> impl IntoView {
    let has_reviews = !reviews.is_empty();

    view! {
        <section id=REVIEWS_ANCHOR class="section">
            <div class="container">
                <h2 class="section-title">"What Clients Say"</h2>
                <p class="section-lead">"Real outcomes from US businesses running Google Ads at scale."</p>

                {if has_reviews {
                    view! {
                        <div class="card-grid reviews-grid">
                            {reviews.into_iter().map(|review| view! {
                                <ReviewCard review=review />
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="placeholder" data-placeholder="reviews">{REVIEWS_PLACEHOLDER}</div>
                    }.into_any()
                }}

                <div class="validation-note">
                    "Validation: Reviews include name, star rating out of 5, and text; placeholder message shows if none. "
                    "Next step: import your testimonials or connect a reviews source."
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="review-card">
            <div class="review-header">
                <div class="review-name">{review.name}</div>
                <StarRating rating=review.rating />
            </div>
            <p class="review-text">{review.text}</p>
        </div>
    }
}
