//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data plus pure reducers so it can be exercised without a
//! DOM; components wrap it in `RwSignal`s.

pub mod form;
