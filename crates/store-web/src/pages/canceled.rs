//! Checkout Canceled Page

use leptos::prelude::*;

#[component]
pub fn CanceledPage() -> impl IntoView {
    view! {
        <div class="canceled-wrapper">
            <div class="canceled">
                <h2>"Checkout canceled"</h2>
                <p>"Your cart is still here whenever you are ready."</p>
                <a href="/" class="btn">"Back to the store"</a>
            </div>
        </div>
    }
}
