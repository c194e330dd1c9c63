pub(crate) mod computed;
