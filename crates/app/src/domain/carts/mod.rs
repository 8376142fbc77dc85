//! Cart persistence across storefront commands.

mod store;

pub use store::{CART_KEY, CartStore};
