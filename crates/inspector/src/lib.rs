//! Tracking and synchronization core for the in-page element inspector.
//!
//! Holds the single shared reference to the currently inspected element and
//! keeps the panel's editable views of its attributes, class list and inline
//! style consistent with the live DOM node. Derived views are recomputed from
//! the element whenever the tracked reference changes or
//! [`ElementTracker::resync`] is invoked after out-of-band mutation.

pub mod attributes;
pub mod class_list;
pub mod error;
pub mod style;
pub mod tracker;

pub use attributes::{
    try_use_attributes, use_attributes, AttributeEntry, AttributeMap, AttributeSync,
    EMPTY_VALUE_PLACEHOLDER,
};
pub use class_list::{try_use_class_list, use_class_list, ClassListSync};
pub use error::ContextError;
pub use style::StylePatch;
pub use tracker::{provide_tracker, try_use_element, use_element, ElementTracker, TrackerProvider};
