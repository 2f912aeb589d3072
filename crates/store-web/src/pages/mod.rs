//! Page Components

mod canceled;
mod home;
mod product;
mod success;

pub use canceled::CanceledPage;
pub use home::HomePage;
pub use product::ProductPage;
pub use success::SuccessPage;
