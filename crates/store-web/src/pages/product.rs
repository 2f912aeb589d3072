//! Product Detail Page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use store_core::{Product, QuantitySelector};

use crate::api;
use crate::components::ProductCard;
use crate::config::image_src;
use crate::state::CartHandle;

#[component]
pub fn ProductPage(cart: CartHandle, show_cart: RwSignal<bool>) -> impl IntoView {
    let params = use_params_map();
    let notices = cart.notices();

    let product = RwSignal::new(None::<Product>);
    let others = RwSignal::new(Vec::<Product>::new());
    let quantity = RwSignal::new(QuantitySelector::new());
    let (selected, set_selected) = signal(0_usize);

    // Refetch and reset the selector whenever the slug changes
    Effect::new(move |_| {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        quantity.update(QuantitySelector::reset);
        set_selected.set(0);

        leptos::task::spawn_local(async move {
            match api::fetch_product(&slug).await {
                Ok(found) => product.set(Some(found)),
                Err(e) => {
                    product.set(None);
                    notices.error(e);
                }
            }

            if let Ok(all) = api::fetch_products().await {
                others.set(all.into_iter().filter(|p| p.slug.current != slug).collect());
            }
        });
    });

    view! {
        <div class="product-page">
            {move || product.get().map(|p| {
                let images = p.image.clone();
                let to_add = p.clone();
                let to_buy = p.clone();

                view! {
                    <div class="product-detail-container">
                        <div>
                            <div class="image-container">
                                <img
                                    class="product-detail-image"
                                    alt=p.name.clone()
                                    src=move || image_src(images.get(selected.get()).map(|i| &i.asset))
                                />
                            </div>
                            <div class="small-images-container">
                                {p.image.iter().enumerate().map(|(i, img)| {
                                    let src = image_src(Some(&img.asset));
                                    view! {
                                        <img
                                            src=src
                                            class=move || if selected.get() == i { "small-image selected-image" } else { "small-image" }
                                            on:mouseenter=move |_| set_selected.set(i)
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="product-detail-desc">
                            <h1>{p.name.clone()}</h1>
                            <h4>"Details: "</h4>
                            <p>{p.details.clone().unwrap_or_default()}</p>
                            <p class="price">{format!("${:.2}", p.price)}</p>

                            <div class="quantity">
                                <h3>"Quantity:"</h3>
                                <p class="quantity-desc">
                                    <span class="minus" on:click=move |_| quantity.update(QuantitySelector::decrement)>"−"</span>
                                    <span class="num">{move || quantity.get().get()}</span>
                                    <span class="plus" on:click=move |_| quantity.update(QuantitySelector::increment)>"+"</span>
                                </p>
                            </div>

                            <div class="buttons">
                                <button type="button" class="add-to-cart" on:click=move |_| {
                                    cart.add(&to_add, quantity.get_untracked().get());
                                }>"Add to Cart"</button>
                                <button type="button" class="buy-now" on:click=move |_| {
                                    if cart.add(&to_buy, quantity.get_untracked().get()) {
                                        show_cart.set(true);
                                    }
                                }>"Buy Now"</button>
                            </div>
                        </div>
                    </div>
                }
            })}

            <div class="maylike-products-wrapper">
                <h2>"You may also like"</h2>
                <div class="maylike-products-container">
                    <For
                        each=move || others.get()
                        key=|p| p.id.clone()
                        children=|p| view! { <ProductCard product=p /> }
                    />
                </div>
            </div>
        </div>
    }
}
