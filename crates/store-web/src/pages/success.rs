//! Order Success Page

use leptos::prelude::*;

use crate::state::CartHandle;

/// Landing page after a completed payment; empties the cart
#[component]
pub fn SuccessPage(cart: CartHandle) -> impl IntoView {
    cart.clear();

    view! {
        <div class="success-wrapper">
            <div class="success">
                <h2>"Thank you for your order!"</h2>
                <p class="email-msg">"Check your email inbox for the receipt."</p>
                <a href="/" class="btn">"Continue Shopping"</a>
            </div>
        </div>
    }
}
