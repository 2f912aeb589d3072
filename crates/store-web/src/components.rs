//! UI Components

use leptos::prelude::*;
use store_core::{CartLineItem, Product, QuantityChange};

use crate::api;
use crate::config::image_src;
use crate::state::{CartHandle, NoticeKind, Notices};

/// Top bar with the cart toggle
#[component]
pub fn Navbar(cart: CartHandle, show_cart: RwSignal<bool>) -> impl IntoView {
    view! {
        <nav class="navbar-container">
            <a href="/" class="logo">"Storefront"</a>
            <button type="button" class="cart-icon" on:click=move |_| show_cart.update(|open| *open = !*open)>
                "Cart"
                <span class="cart-item-qty">{move || cart.total_quantity()}</span>
            </button>
        </nav>
    }
}

/// Product tile on the listing pages
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.slug.current);
    let src = image_src(product.primary_image());

    view! {
        <a href=href class="product-card">
            <img src=src alt=product.name.clone() width="250" height="250" class="product-image" />
            <p class="product-name">{product.name.clone()}</p>
            <p class="product-price">{format!("${:.2}", product.price)}</p>
        </a>
    }
}

/// Current notification, click to dismiss
#[component]
pub fn NoticeBar(notices: Notices) -> impl IntoView {
    move || {
        notices.current().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
                NoticeKind::Loading => "notice notice-loading",
            };
            view! {
                <div class=class role="status" on:click=move |_| notices.dismiss()>
                    {notice.message}
                </div>
            }
        })
    }
}

/// One line in the cart drawer
#[component]
fn CartRow(cart: CartHandle, item: CartLineItem) -> impl IntoView {
    let src = image_src(item.primary_image());
    let qty_id = item.id.clone();
    let dec_id = item.id.clone();
    let inc_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="product">
            <img src=src alt=item.name.clone() class="cart-product-image" />
            <div class="item-desc">
                <div class="flex top">
                    <h5>{item.name.clone()}</h5>
                    <h4>{format!("${:.2}", item.price)}</h4>
                </div>
                <div class="flex bottom">
                    <p class="quantity-desc">
                        <span class="minus" on:click=move |_| {
                            cart.adjust_quantity(&dec_id, QuantityChange::Decrement);
                        }>"−"</span>
                        <span class="num">{move || cart.quantity(&qty_id).unwrap_or_default()}</span>
                        <span class="plus" on:click=move |_| {
                            cart.adjust_quantity(&inc_id, QuantityChange::Increment);
                        }>"+"</span>
                    </p>
                    <button type="button" class="remove-item" on:click=move |_| {
                        cart.remove(&remove_id);
                    }>"Remove"</button>
                </div>
            </div>
        </div>
    }
}

/// Slide-out cart with subtotal and the checkout button
#[component]
pub fn CartDrawer(cart: CartHandle, show_cart: RwSignal<bool>) -> impl IntoView {
    let (checking_out, set_checking_out) = signal(false);
    let notices = cart.notices();

    let checkout = move |_| {
        if checking_out.get_untracked() {
            return;
        }

        let items = cart.snapshot();
        set_checking_out.set(true);

        leptos::task::spawn_local(async move {
            let outcome = match api::create_checkout(&items).await {
                Ok(session) => session
                    .url
                    .ok_or_else(|| "Checkout session has no payment page.".to_string())
                    .and_then(|url| {
                        notices.loading("Redirecting to checkout...");
                        api::redirect(&url)
                    }),
                Err(e) => Err(e),
            };

            if let Err(e) = outcome {
                notices.error(e);
                set_checking_out.set(false);
            }
        });
    };

    view! {
        <Show when=move || show_cart.get()>
            <div class="cart-wrapper">
                <div class="cart-container">
                    <button type="button" class="cart-heading" on:click=move |_| show_cart.set(false)>
                        <span class="heading">"Your Cart"</span>
                        <span class="cart-num-items">
                            {move || format!("({} items)", cart.total_quantity())}
                        </span>
                    </button>

                    <Show when=move || cart.is_empty()>
                        <div class="empty-cart">
                            <h3>"Your shopping bag is empty"</h3>
                            <a href="/" class="btn" on:click=move |_| show_cart.set(false)>
                                "Continue Shopping"
                            </a>
                        </div>
                    </Show>

                    <div class="product-container">
                        <For
                            each=move || cart.items()
                            key=|item| item.id.clone()
                            children=move |item| view! { <CartRow cart=cart item=item /> }
                        />
                    </div>

                    <Show when=move || !cart.is_empty()>
                        <div class="cart-bottom">
                            <div class="total">
                                <h3>"Subtotal:"</h3>
                                <h3>{move || format!("${}", cart.total_price())}</h3>
                            </div>
                            <div class="btn-container">
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=checkout
                                    disabled=move || checking_out.get()
                                >
                                    "Pay with Stripe"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
