mod overlap;

#[doc(inline)]
pub use overlap::BBoxOverlap;
#[doc(inline)]
pub use overlap::HullOverlap;
#[doc(inline)]
pub use overlap::OverlapMode;
#[doc(inline)]
pub use overlap::OverlapTest;
#[doc(inline)]
pub use overlap::hulls_overlap;
