pub(crate) mod context;
pub(crate) mod corner_clip;
pub(crate) mod display_list;
pub(crate) mod node;
pub(crate) mod settings;
