mod instance;
mod item;
mod layout;
mod placed_outline;
mod sheet;
mod solution;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use placed_outline::PlacedOutline;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use solution::NestSolution;
