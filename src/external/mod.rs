pub(crate) mod quote_provider;
pub(crate) mod yahoo;
