//! Home Page

use leptos::prelude::*;
use store_core::Product;

use crate::api;
use crate::components::ProductCard;
use crate::state::Notices;

#[component]
pub fn HomePage(notices: Notices) -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());

    leptos::task::spawn_local(async move {
        match api::fetch_products().await {
            Ok(list) => set_products.set(list),
            Err(e) => notices.error(e),
        }
    });

    view! {
        <div class="home">
            <header class="hero-banner">
                <h1>"Best Selling Products"</h1>
                <p>"Speakers of many variations"</p>
            </header>

            <div class="products-container">
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
        </div>
    }
}
