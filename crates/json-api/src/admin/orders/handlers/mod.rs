//! Admin Order Handlers

pub(crate) mod recompute;
pub(crate) mod status;
pub(crate) mod update_items;
