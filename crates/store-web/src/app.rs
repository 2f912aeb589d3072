//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{CartDrawer, Navbar, NoticeBar};
use crate::pages::{CanceledPage, HomePage, ProductPage, SuccessPage};
use crate::state::{CartHandle, Notices};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let notices = Notices::new();
    let cart = CartHandle::new(notices);
    let show_cart = RwSignal::new(false);

    view! {
        <Router>
            <Navbar cart=cart show_cart=show_cart />
            <CartDrawer cart=cart show_cart=show_cart />
            <NoticeBar notices=notices />
            <main class="main-container">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=move || view! { <HomePage notices=notices /> } />
                    <Route
                        path=path!("/product/:slug")
                        view=move || view! { <ProductPage cart=cart show_cart=show_cart /> }
                    />
                    <Route path=path!("/success") view=move || view! { <SuccessPage cart=cart /> } />
                    <Route path=path!("/canceled") view=CanceledPage />
                </Routes>
            </main>
        </Router>
    }
}
